//! TodoItem value object.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }
}

/// A single pending task.
///
/// Carries no identity beyond its text and its position in the list;
/// duplicate texts are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem(String);

impl TodoItem {
    /// Create an item from user-supplied text.
    ///
    /// The text is taken as-is, whitespace included. Only the empty
    /// string is rejected.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `text` is empty
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::empty_field("item"));
        }
        Ok(TodoItem(text))
    }

    /// Returns the item text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
