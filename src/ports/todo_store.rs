//! To-do store port.
//!
//! Defines the contract between the application handlers and the shared
//! list state. The only shipped implementation keeps the list in memory;
//! the seam exists so handlers can be exercised against doubles in tests.
//!
//! # Design
//!
//! The store has no failure mode: invalid input (empty text, out-of-range
//! index) degrades to a no-op, reported through the `Option` returns so
//! callers can log it. Implementations must make each method atomic with
//! respect to the others under concurrent requests.

use async_trait::async_trait;

use crate::domain::todo::TodoItem;

/// Port for the shared, ordered collection of pending to-do items.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Current items in insertion order.
    async fn snapshot(&self) -> Vec<TodoItem>;

    /// Append `text` as the new last item.
    ///
    /// Returns the appended item, or `None` when the text is empty and
    /// nothing was stored.
    async fn append(&self, text: &str) -> Option<TodoItem>;

    /// Remove the item at `index`, shifting later items left.
    ///
    /// Returns the removed item, or `None` when the index is out of
    /// range and nothing changed.
    async fn remove_at(&self, index: usize) -> Option<TodoItem>;
}
