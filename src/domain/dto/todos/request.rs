//! Todo request DTOs
//!
//! Payload structures for todo creation and partial update. Known fields are
//! validated; unknown fields are collected into `extra` and stored untouched.

use mongodb::bson::{DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::todos::{Todo, TodoStatus};

/// Payload for creating a single todo
///
/// The owning user is never part of the payload; it is taken from the
/// session at the handler level.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Task title
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: String,

    /// Free-form details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Completion state, `active` when omitted
    #[serde(default)]
    pub status: TodoStatus,

    /// Any additional fields, accepted as-is
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateTodoRequest {
    /// Builds the entity to persist, stamping the creation time and owner.
    pub fn into_todo(self, owner: ObjectId) -> Todo {
        Todo {
            id: None,
            title: self.title,
            description: self.description,
            status: self.status,
            date: DateTime::now(),
            user: owner,
            extra: self.extra,
        }
    }
}

/// Payload for partially updating a todo
///
/// Only the provided fields are replaced; omitted known fields keep their
/// stored values. Unknown fields are replaced as given.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,

    #[serde(flatten)]
    pub extra: Document,
}

impl UpdateTodoRequest {
    /// Flattens the provided fields into a `$set`-ready document.
    ///
    /// Omitted fields are absent from the result, so the update replaces
    /// exactly what the client sent.
    pub fn into_update_document(self) -> Result<Document, mongodb::bson::ser::Error> {
        mongodb::bson::to_document(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_status_to_active() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title": "buy milk"}"#).unwrap();
        assert_eq!(req.status, TodoStatus::Active);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_collects_unknown_fields() {
        let req: CreateTodoRequest =
            serde_json::from_str(r#"{"title": "t", "priority": "high"}"#).unwrap();
        assert_eq!(req.extra.get_str("priority").unwrap(), "high");

        let todo = req.into_todo(ObjectId::new());
        assert_eq!(todo.extra.get_str("priority").unwrap(), "high");
    }

    #[test]
    fn test_update_document_contains_only_provided_fields() {
        let req: UpdateTodoRequest =
            serde_json::from_str(r#"{"title": "new title", "priority": "high"}"#).unwrap();
        let doc = req.into_update_document().unwrap();

        assert_eq!(doc.get_str("title").unwrap(), "new title");
        assert_eq!(doc.get_str("priority").unwrap(), "high");
        assert!(!doc.contains_key("description"));
        assert!(!doc.contains_key("status"));
    }

    #[test]
    fn test_update_document_empty_when_body_empty() {
        let req: UpdateTodoRequest = serde_json::from_str("{}").unwrap();
        let doc = req.into_update_document().unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_update_rejects_empty_title() {
        let req: UpdateTodoRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
