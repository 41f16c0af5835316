//! CompleteTodoHandler - Command handler for marking an item done.
//!
//! "Done" means removed from the list; there is no completed state.

use std::sync::Arc;

use crate::domain::todo::TodoItem;
use crate::ports::TodoStore;

/// Command to remove the item at a zero-based position.
#[derive(Debug, Clone, Copy)]
pub struct CompleteTodoCommand {
    pub index: usize,
}

/// Result of a removal attempt.
///
/// `OutOfRange` is not an error: stale or out-of-range positions are
/// ignored and the caller responds exactly as on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteTodoOutcome {
    Completed { index: usize, item: TodoItem },
    OutOfRange { index: usize },
}

/// Handler for completing (removing) to-do items.
pub struct CompleteTodoHandler {
    store: Arc<dyn TodoStore>,
}

impl CompleteTodoHandler {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CompleteTodoCommand) -> CompleteTodoOutcome {
        match self.store.remove_at(cmd.index).await {
            Some(item) => CompleteTodoOutcome::Completed {
                index: cmd.index,
                item,
            },
            None => CompleteTodoOutcome::OutOfRange { index: cmd.index },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTodoStore;

    async fn handler_with(items: &[&str]) -> (CompleteTodoHandler, Arc<InMemoryTodoStore>) {
        let store = Arc::new(InMemoryTodoStore::new());
        for text in items {
            store.append(text).await;
        }
        (CompleteTodoHandler::new(store.clone()), store)
    }

    #[tokio::test]
    async fn removes_the_addressed_item() {
        let (handler, store) = handler_with(&["a", "b", "c"]).await;

        let outcome = handler.handle(CompleteTodoCommand { index: 1 }).await;

        match outcome {
            CompleteTodoOutcome::Completed { index, item } => {
                assert_eq!(index, 1);
                assert_eq!(item.text(), "b");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        let texts: Vec<String> = store
            .snapshot()
            .await
            .iter()
            .map(|i| i.text().to_string())
            .collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn out_of_range_index_is_ignored() {
        let (handler, store) = handler_with(&["a"]).await;

        let outcome = handler.handle(CompleteTodoCommand { index: 3 }).await;

        assert_eq!(outcome, CompleteTodoOutcome::OutOfRange { index: 3 });
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn empty_list_index_is_ignored() {
        let (handler, store) = handler_with(&[]).await;

        let outcome = handler.handle(CompleteTodoCommand { index: 0 }).await;

        assert_eq!(outcome, CompleteTodoOutcome::OutOfRange { index: 0 });
        assert!(store.is_empty().await);
    }
}
