//! Todo Entity
//!
//! A personal task owned by the backend. The client only mirrors it.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;
use super::error::{SyncError, SyncResult};

/// Server-assigned identifier
pub type TodoId = i64;

/// A todo record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, stable for the record's lifetime
    pub id: TodoId,
    pub title: String,
    /// May be empty; the backend sends `null` for records created without one
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>, description: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_completed,
        }
    }

    /// Full-replace payload carrying this record's current fields
    pub fn to_input(&self) -> TodoInput {
        TodoInput {
            title: self.title.clone(),
            description: self.description.clone(),
            is_completed: self.is_completed,
        }
    }

    /// Patch the editable fields in place; `id` is left untouched
    pub fn apply(&mut self, input: &TodoInput) {
        self.title = input.title.clone();
        self.description = input.description.clone();
        self.is_completed = input.is_completed;
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body of create (POST) and update (PUT) requests
///
/// Updates replace the whole record on the server, so all three fields are
/// always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl TodoInput {
    /// Build a payload from form values, trimming both text fields
    pub fn new(title: &str, description: &str, is_completed: bool) -> SyncResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SyncError::Validation("Title is required".to_string()));
        }
        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            is_completed,
        })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":42,"title":"Buy milk","description":null,"isCompleted":false,"userId":"u-1"}"#,
        )
        .unwrap();
        assert_eq!(todo, Todo::new(42, "Buy milk", "", false));
        assert_eq!(todo.id(), 42);
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"title":"A","isCompleted":true}"#).unwrap();
        assert_eq!(todo.description, "");
        assert!(todo.is_completed);
    }

    #[test]
    fn test_input_serializes_all_fields() {
        let input = TodoInput::new("  A ", "", false).unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"title": "A", "description": "", "isCompleted": false}));
    }

    #[test]
    fn test_input_rejects_blank_title() {
        let err = TodoInput::new(" \t\n", "desc", false).unwrap_err();
        assert_eq!(err, SyncError::Validation("Title is required".to_string()));
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut todo = Todo::new(7, "Old", "old", false);
        todo.apply(&TodoInput::new("New", " details ", true).unwrap());
        assert_eq!(todo, Todo::new(7, "New", "details", true));
    }
}
