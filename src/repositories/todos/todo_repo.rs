//! # Todo Repository Implementation
//!
//! Data access layer for todo documents, backed by the `todos` MongoDB
//! collection. Every lookup variant of the API maps to one parameterized
//! query here; response projection happens at the DTO level, not in the
//! store.
//!
//! ## Error handling
//!
//! All methods return `Result<T, AppError>`:
//!
//! - **DatabaseError**: connection or query execution failure
//! - **ValidationError**: malformed ObjectId strings

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::{IndexModel, options::IndexOptions};
use std::sync::Arc;

use crate::db::Database;
use crate::domain::entities::todos::Todo;
use crate::errors::{AppError, AppResult};
use crate::repositories::TodoStore;

/// Title matched by the fixed sample view
const SAMPLE_VIEW_TITLE: &str = "sample";

/// Hard cap on the number of records the sample view returns
const SAMPLE_VIEW_LIMIT: i64 = 2;

/// MongoDB-backed todo repository
pub struct MongoTodoRepository {
    db: Arc<Database>,
}

impl MongoTodoRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Todo> {
        self.db.collection::<Todo>("todos")
    }

    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))
    }

    /// Creates the collection indexes.
    ///
    /// Run once at application startup. The owner index backs the forward
    /// and backward traversal between users and their todos.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(IndexOptions::builder().name("user_asc".to_string()).build())
            .build();

        self.collection()
            .create_indexes([owner_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TodoStore for MongoTodoRepository {
    async fn find_sample(&self) -> AppResult<Vec<Todo>> {
        self.collection()
            .find(doc! { "title": SAMPLE_VIEW_TITLE })
            .limit(SAMPLE_VIEW_LIMIT)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_active(&self) -> AppResult<Vec<Todo>> {
        self.collection()
            .find(doc! { "status": "active" })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_title_containing(&self, term: &str) -> AppResult<Vec<Todo>> {
        // Store-side substring match; the terms passed in are fixed
        // constants, so no regex escaping is performed here.
        self.collection()
            .find(doc! { "title": { "$regex": term } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Todo>> {
        let object_id = Self::parse_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, todo: Todo) -> AppResult<ObjectId> {
        let result = self
            .collection()
            .insert_one(&todo)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("inserted id was not an ObjectId".to_string()))
    }

    async fn insert_many(&self, todos: Vec<Todo>) -> AppResult<Vec<ObjectId>> {
        let result = self
            .collection()
            .insert_many(&todos)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result
            .inserted_ids
            .into_values()
            .filter_map(|id| id.as_object_id())
            .collect())
    }

    async fn update(&self, id: &str, changes: Document) -> AppResult<Option<Todo>> {
        let object_id = Self::parse_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": changes })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<Option<Todo>> {
        let object_id = Self::parse_id(id)?;

        self.collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
