//! HTTP routes for the to-do endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_todo, complete_todo, index, TodoHandlers};

/// Creates the to-do router with all endpoints.
pub fn todo_routes(handlers: TodoHandlers) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_todo))
        .route("/done/:index", post(complete_todo))
        .with_state(handlers)
}
