//! In-Memory To-do Store Adapter
//!
//! Keeps the to-do list in process memory behind a single lock. State
//! resets on restart.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::todo::{TodoItem, TodoList};
use crate::ports::TodoStore;

/// In-memory store for the shared to-do list.
///
/// The `RwLock` is the single mutual-exclusion guard for the list:
/// `append` and `remove_at` take the write lock, `snapshot` the read
/// lock, so each operation is atomic with respect to the others even
/// when requests interleave.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    list: Arc<RwLock<TodoList>>,
}

impl InMemoryTodoStore {
    /// Create a store holding an empty list.
    pub fn new() -> Self {
        Self {
            list: Arc::new(RwLock::new(TodoList::new())),
        }
    }

    /// Clear all stored items (useful for tests).
    pub async fn clear(&self) {
        *self.list.write().await = TodoList::new();
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.list.read().await.len()
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.list.read().await.is_empty()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn snapshot(&self) -> Vec<TodoItem> {
        self.list.read().await.snapshot().to_vec()
    }

    async fn append(&self, text: &str) -> Option<TodoItem> {
        self.list.write().await.append(text).cloned()
    }

    async fn remove_at(&self, index: usize) -> Option<TodoItem> {
        self.list.write().await.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_and_snapshot() {
        let store = InMemoryTodoStore::new();
        store.append("a").await;
        store.append("b").await;

        let items = store.snapshot().await;
        let texts: Vec<&str> = items.iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn empty_append_stores_nothing() {
        let store = InMemoryTodoStore::new();
        assert!(store.append("").await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_at_returns_the_removed_item() {
        let store = InMemoryTodoStore::new();
        store.append("a").await;
        store.append("b").await;

        let removed = store.remove_at(0).await.unwrap();
        assert_eq!(removed.text(), "a");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn out_of_range_remove_is_a_no_op() {
        let store = InMemoryTodoStore::new();
        store.append("only").await;

        assert!(store.remove_at(5).await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn snapshot_is_a_copy() {
        let store = InMemoryTodoStore::new();
        store.append("a").await;

        let before = store.snapshot().await;
        store.remove_at(0).await;
        assert_eq!(before.len(), 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_appends_both_land() {
        let store = InMemoryTodoStore::new();

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.append("from-a").await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.append("from-b").await })
        };
        a.await.unwrap();
        b.await.unwrap();

        let items = store.snapshot().await;
        assert_eq!(items.len(), 2);
        assert!(items.iter().any(|i| i.text() == "from-a"));
        assert!(items.iter().any(|i| i.text() == "from-b"));
    }

    #[tokio::test]
    async fn clear_resets_to_empty() {
        let store = InMemoryTodoStore::new();
        store.append("a").await;
        store.clear().await;
        assert!(store.is_empty().await);
    }
}
