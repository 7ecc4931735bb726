//! # User Repository Implementation
//!
//! Data access layer for user documents, backed by the `users` MongoDB
//! collection. The todo endpoints read users for owner expansion and login,
//! and maintain the forward reference list of owned todo ids; account
//! creation and deletion happen outside this service.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{IndexModel, options::IndexOptions};
use std::sync::Arc;

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserStore;

/// MongoDB-backed user repository
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.collection::<User>("users")
    }

    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))
    }

    /// Creates the collection indexes.
    ///
    /// Run once at application startup. The login name is unique across the
    /// system.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = Self::parse_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn push_todo(&self, user_id: &str, todo_id: &ObjectId) -> AppResult<bool> {
        let object_id = Self::parse_id(user_id)?;

        let result = self
            .collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$push": { "todos": *todo_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn pull_todo(&self, user_id: &str, todo_id: &ObjectId) -> AppResult<bool> {
        let object_id = Self::parse_id(user_id)?;

        let result = self
            .collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$pull": { "todos": *todo_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}
