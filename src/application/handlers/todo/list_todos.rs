//! ListTodosHandler - Query handler for the current list.

use std::sync::Arc;

use crate::domain::todo::TodoItem;
use crate::ports::TodoStore;

/// Handler for reading the current to-do list.
pub struct ListTodosHandler {
    store: Arc<dyn TodoStore>,
}

impl ListTodosHandler {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Items in insertion order. Never fails.
    pub async fn handle(&self) -> Vec<TodoItem> {
        self.store.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTodoStore;

    #[tokio::test]
    async fn returns_items_in_insertion_order() {
        let store = Arc::new(InMemoryTodoStore::new());
        store.append("first").await;
        store.append("second").await;
        let handler = ListTodosHandler::new(store);

        let items = handler.handle().await;
        let texts: Vec<&str> = items.iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_list() {
        let handler = ListTodosHandler::new(Arc::new(InMemoryTodoStore::new()));
        assert!(handler.handle().await.is_empty());
    }
}
