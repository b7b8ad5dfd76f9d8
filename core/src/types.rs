//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so
//! the client does not link against axum or SQLite. Integration tests catch
//! any schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_complete { 'x' } else { ' ' };
        write!(f, "[{mark}] {} {}", self.id, self.text)
    }
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub text: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// A freshly created item plus the `Location` the server reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTodo {
    pub item: TodoItem,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_completion() {
        let mut item = TodoItem {
            id: 2,
            text: "Buy milk".to_string(),
            is_complete: false,
        };
        assert_eq!(item.to_string(), "[ ] 2 Buy milk");
        item.is_complete = true;
        assert_eq!(item.to_string(), "[x] 2 Buy milk");
    }

    #[test]
    fn create_todo_serializes_camel_case() {
        let input = CreateTodo {
            text: "Walk dog".to_string(),
            is_complete: true,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Walk dog", "isComplete": true}));
    }
}
