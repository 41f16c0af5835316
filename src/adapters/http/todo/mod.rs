//! HTTP adapter for the to-do endpoints.

mod dto;
mod handlers;
mod routes;
mod views;

pub use dto::AddTodoForm;
pub use handlers::TodoHandlers;
pub use routes::todo_routes;
