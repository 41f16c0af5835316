//! AddTodoHandler - Command handler for appending a to-do item.

use std::sync::Arc;

use crate::domain::todo::TodoItem;
use crate::ports::TodoStore;

/// Command to append a new to-do item.
///
/// `text` is `None` when the form field was absent from the request.
#[derive(Debug, Clone)]
pub struct AddTodoCommand {
    pub text: Option<String>,
}

/// Result of an append attempt.
///
/// `IgnoredEmpty` is not an error: empty or absent input is a silent
/// no-op and the caller responds exactly as on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTodoOutcome {
    Added(TodoItem),
    IgnoredEmpty,
}

/// Handler for appending to-do items.
pub struct AddTodoHandler {
    store: Arc<dyn TodoStore>,
}

impl AddTodoHandler {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddTodoCommand) -> AddTodoOutcome {
        let Some(text) = cmd.text else {
            return AddTodoOutcome::IgnoredEmpty;
        };
        match self.store.append(&text).await {
            Some(item) => AddTodoOutcome::Added(item),
            None => AddTodoOutcome::IgnoredEmpty,
        }
    }
}
