//! To-do command and query handlers.

mod add_todo;
mod complete_todo;
mod list_todos;

pub use add_todo::{AddTodoCommand, AddTodoHandler, AddTodoOutcome};
pub use complete_todo::{CompleteTodoCommand, CompleteTodoHandler, CompleteTodoOutcome};
pub use list_todos::ListTodosHandler;
