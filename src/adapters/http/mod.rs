//! HTTP adapters - the browser-facing surface.

pub mod todo;

pub use todo::{todo_routes, TodoHandlers};
