//! Todo Entity Implementation
//!
//! The core task record of the service. Every todo carries a back-reference
//! to its owning user; fields beyond the known schema are accepted at
//! creation time and carried through storage untouched.

use mongodb::bson::{DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Completion state of a todo
///
/// Serialized in lowercase, matching the stored representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    /// Still open
    #[default]
    Active,
    /// Completed or parked
    Inactive,
}

impl TodoStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TodoStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Active => "active",
            TodoStatus::Inactive => "inactive",
        }
    }
}

/// Todo entity
///
/// One task item owned by exactly one user. The `user` field is the
/// back-reference half of the ownership relation; the forward half is the
/// owning user's `todos` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Task title
    pub title: String,
    /// Free-form details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion state
    pub status: TodoStatus,
    /// Creation timestamp, never exposed in responses
    pub date: DateTime,
    /// Owning user reference
    pub user: ObjectId,
    /// Additional fields accepted at creation time and stored as-is
    #[serde(flatten)]
    pub extra: Document,
}

impl Todo {
    /// Hex string form of the id, if assigned.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TodoStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&TodoStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn test_status_default_is_active() {
        assert_eq!(TodoStatus::default(), TodoStatus::Active);
        assert!(TodoStatus::default().is_active());
    }

    #[test]
    fn test_unknown_fields_round_trip_through_extra() {
        let raw = doc! {
            "title": "buy milk",
            "status": "active",
            "date": DateTime::now(),
            "user": ObjectId::new(),
            "priority": 3,
        };

        let todo: Todo = mongodb::bson::from_document(raw).unwrap();
        assert_eq!(todo.title, "buy milk");
        assert_eq!(todo.extra.get_i32("priority").unwrap(), 3);

        let back = mongodb::bson::to_document(&todo).unwrap();
        assert_eq!(back.get_i32("priority").unwrap(), 3);
    }
}
