//! Wire DTOs for the todo API.
//!
//! JSON field names are camelCase (`id`, `text`, `isComplete`).

use serde::{Deserialize, Serialize};

/// A stored todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub text: String,
    pub is_complete: bool,
}

/// Request body for POST and PUT.
///
/// POST ignores `id`. PUT requires it to equal the path id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub text: String,
    #[serde(default)]
    pub is_complete: bool,
}
