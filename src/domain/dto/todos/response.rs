//! Todo response DTOs
//!
//! Projections of the todo entity for the API. The store id, internal
//! revision and creation date never leave the service; extra fields stored
//! at creation time are carried through.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::domain::entities::todos::{Todo, TodoStatus};
use crate::domain::entities::users::User;

/// Projected todo as returned by the single-item and listing endpoints
///
/// The owner appears as its hex id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoResponse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TodoStatus,
    pub user: String,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        let Todo {
            title,
            description,
            status,
            user,
            extra,
            ..
        } = todo;

        Self {
            title,
            description,
            status,
            user: user.to_hex(),
            extra,
        }
    }
}

/// Owner fields exposed by the sample view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoOwnerResponse {
    pub name: String,
    pub username: String,
}

impl From<User> for TodoOwnerResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            username: user.username,
        }
    }
}

/// Projected todo with the owner reference expanded inline
///
/// An ownership reference that does not resolve renders as `"user": null`
/// rather than failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulatedTodoResponse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TodoStatus,
    pub user: Option<TodoOwnerResponse>,
    #[serde(flatten)]
    pub extra: Document,
}

impl PopulatedTodoResponse {
    pub fn new(todo: Todo, owner: Option<User>) -> Self {
        let Todo {
            title,
            description,
            status,
            extra,
            ..
        } = todo;

        Self {
            title,
            description,
            status,
            user: owner.map(TodoOwnerResponse::from),
            extra,
        }
    }
}

/// Listing wrapper used by the filter endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub data: Vec<TodoResponse>,
}

impl From<Vec<Todo>> for TodoListResponse {
    fn from(todos: Vec<Todo>) -> Self {
        Self {
            data: todos.into_iter().map(TodoResponse::from).collect(),
        }
    }
}

/// Plain success message body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, doc, oid::ObjectId};

    fn sample_todo(owner: ObjectId) -> Todo {
        Todo {
            id: Some(ObjectId::new()),
            title: "buy milk".to_string(),
            description: None,
            status: TodoStatus::Active,
            date: DateTime::now(),
            user: owner,
            extra: doc! {},
        }
    }

    #[test]
    fn test_projection_excludes_id_and_date() {
        let owner = ObjectId::new();
        let response = TodoResponse::from(sample_todo(owner));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["title"], "buy milk");
        assert_eq!(json["user"], owner.to_hex());
        assert!(json.get("_id").is_none());
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_unresolved_owner_renders_null() {
        let response = PopulatedTodoResponse::new(sample_todo(ObjectId::new()), None);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["user"].is_null());
    }

    #[test]
    fn test_resolved_owner_exposes_name_and_username_only() {
        let owner = User::new("Jane".into(), "jane".into(), "hash".into());
        let response = PopulatedTodoResponse::new(sample_todo(ObjectId::new()), Some(owner));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["user"]["name"], "Jane");
        assert_eq!(json["user"]["username"], "jane");
        assert!(json["user"].get("password_hash").is_none());
        assert!(json["user"].get("_id").is_none());
    }
}
