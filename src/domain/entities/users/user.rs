//! User Entity Implementation
//!
//! Account entity owning todos. Created and destroyed outside this service;
//! the todo endpoints only ever read it and maintain its forward reference
//! list of owned todo ids.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// User entity
///
/// `todos` is an ordered forward reference list (duplicates permitted)
/// maintained redundantly alongside the `Todo::user` back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Display name
    pub name: String,
    /// Login name (unique)
    pub username: String,
    /// Hashed credential, consumed by the session gate only
    pub password_hash: String,
    /// Forward references to owned todos
    #[serde(default)]
    pub todos: Vec<ObjectId>,
    /// Creation timestamp
    pub created_at: DateTime,
}

impl User {
    /// Creates a new user with an empty todo list.
    pub fn new(name: String, username: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            username,
            password_hash,
            todos: Vec::new(),
            created_at: DateTime::now(),
        }
    }

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
    fn test_missing_todo_list_defaults_to_empty() {
        let raw = doc! {
            "name": "Jane",
            "username": "jane",
            "password_hash": "x",
            "created_at": DateTime::now(),
        };

        let user: User = mongodb::bson::from_document(raw).unwrap();
        assert!(user.todos.is_empty());
    }

    #[test]
    fn test_id_string() {
        let mut user = User::new("Jane".into(), "jane".into(), "x".into());
        assert_eq!(user.id_string(), None);

        let oid = ObjectId::new();
        user.id = Some(oid);
        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }
}
