//! TodoList aggregate.
//!
//! The authoritative ordered collection of pending items. Items are
//! addressed by zero-based position; positions are NOT stable, removing
//! an item shifts every later index down by one.

use serde::Serialize;

use super::item::TodoItem;

/// Ordered, in-memory collection of pending to-do items.
///
/// # Invariants
///
/// - Insertion order is preserved through removals.
/// - A position `i` is addressable iff `0 <= i < len`.
/// - Duplicate texts are permitted; the empty list is valid and is the
///   initial state.
///
/// Invalid input never raises: appending empty text and removing an
/// out-of-range position are both silent no-ops. Callers that want to
/// log the outcome inspect the `Option` returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Read-only view of the items in insertion order.
    pub fn snapshot(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Append `text` as the new last item.
    ///
    /// Empty text leaves the list untouched and returns `None`; the text
    /// is otherwise taken verbatim, without trimming. Returns the
    /// appended item.
    pub fn append(&mut self, text: &str) -> Option<&TodoItem> {
        let item = TodoItem::new(text).ok()?;
        self.items.push(item);
        self.items.last()
    }

    /// Remove and return the item at `index`, shifting later items left.
    ///
    /// An out-of-range index leaves the list unchanged and returns
    /// `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<TodoItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }
}
