//! Application handlers.

pub mod todo;

pub use todo::{
    AddTodoCommand, AddTodoHandler, AddTodoOutcome, CompleteTodoCommand, CompleteTodoHandler,
    CompleteTodoOutcome, ListTodosHandler,
};
