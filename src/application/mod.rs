//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations over the ports. Command handlers
//! (write) are separated from query handlers (read).

pub mod handlers;

pub use handlers::{
    AddTodoCommand, AddTodoHandler, AddTodoOutcome, CompleteTodoCommand, CompleteTodoHandler,
    CompleteTodoOutcome, ListTodosHandler,
};
