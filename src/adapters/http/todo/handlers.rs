//! HTTP handlers for the to-do endpoints.
//!
//! Both POST handlers always answer with a redirect to `/`
//! (post/redirect/get), whether or not the command changed anything.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::application::handlers::todo::{
    AddTodoCommand, AddTodoHandler, AddTodoOutcome, CompleteTodoCommand, CompleteTodoHandler,
    CompleteTodoOutcome, ListTodosHandler,
};
use crate::ports::TodoStore;

use super::dto::AddTodoForm;
use super::views;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TodoHandlers {
    list_handler: Arc<ListTodosHandler>,
    add_handler: Arc<AddTodoHandler>,
    complete_handler: Arc<CompleteTodoHandler>,
}

impl TodoHandlers {
    pub fn new(
        list_handler: Arc<ListTodosHandler>,
        add_handler: Arc<AddTodoHandler>,
        complete_handler: Arc<CompleteTodoHandler>,
    ) -> Self {
        Self {
            list_handler,
            add_handler,
            complete_handler,
        }
    }

    /// Wire all handlers over one shared store.
    pub fn for_store(store: Arc<dyn TodoStore>) -> Self {
        Self::new(
            Arc::new(ListTodosHandler::new(store.clone())),
            Arc::new(AddTodoHandler::new(store.clone())),
            Arc::new(CompleteTodoHandler::new(store)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Render the current list.
pub async fn index(State(handlers): State<TodoHandlers>) -> Response {
    let items = handlers.list_handler.handle().await;
    Html(views::render_index(&items)).into_response()
}

/// POST /add - Append a to-do item, then redirect home.
pub async fn add_todo(
    State(handlers): State<TodoHandlers>,
    Form(form): Form<AddTodoForm>,
) -> Response {
    let cmd = AddTodoCommand { text: form.item };

    match handlers.add_handler.handle(cmd).await {
        AddTodoOutcome::Added(item) => {
            tracing::debug!(item = %item.text(), "to-do appended");
        }
        AddTodoOutcome::IgnoredEmpty => {
            tracing::debug!("empty to-do submission ignored");
        }
    }

    Redirect::to("/").into_response()
}

/// POST /done/:index - Remove the item at a position, then redirect home.
///
/// A non-integer segment never reaches this handler; the `Path<usize>`
/// extractor rejects it as a client error.
pub async fn complete_todo(
    State(handlers): State<TodoHandlers>,
    Path(index): Path<usize>,
) -> Response {
    let cmd = CompleteTodoCommand { index };

    match handlers.complete_handler.handle(cmd).await {
        CompleteTodoOutcome::Completed { index, item } => {
            tracing::debug!(index, item = %item.text(), "to-do completed");
        }
        CompleteTodoOutcome::OutOfRange { index } => {
            tracing::debug!(index, "out-of-range done request ignored");
        }
    }

    Redirect::to("/").into_response()
}
