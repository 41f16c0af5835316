//! HTTP DTOs for the to-do endpoints.

use serde::Deserialize;

/// Form body of `POST /add`.
///
/// `item` is optional so a submission without the field deserializes
/// instead of being rejected; absent and empty are both the append
/// no-op.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTodoForm {
    #[serde(default)]
    pub item: Option<String>,
}
