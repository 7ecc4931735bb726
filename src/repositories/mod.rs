//! Repository layer
//!
//! Persistence-facing abstractions over the document store. The handlers
//! depend on the [`TodoStore`] and [`UserStore`] traits only; the MongoDB
//! implementations are constructed once at startup and injected as trait
//! objects, which keeps the HTTP layer testable against in-memory fakes.

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::domain::entities::todos::Todo;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

pub mod todos;
pub mod users;

pub use todos::MongoTodoRepository;
pub use users::MongoUserRepository;

/// Persistence operations for todo documents
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Fixed sample lookup: at most two records matching the sample
    /// condition, in the store's natural order.
    async fn find_sample(&self) -> AppResult<Vec<Todo>>;

    /// All todos whose status is active.
    async fn find_active(&self) -> AppResult<Vec<Todo>>;

    /// All todos whose title contains `term` (case-sensitive).
    async fn find_by_title_containing(&self, term: &str) -> AppResult<Vec<Todo>>;

    /// Lookup by id. `Ok(None)` when the id does not resolve.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Todo>>;

    /// Inserts one todo and returns its assigned id.
    async fn insert(&self, todo: Todo) -> AppResult<ObjectId>;

    /// Inserts a batch of todos and returns the assigned ids.
    async fn insert_many(&self, todos: Vec<Todo>) -> AppResult<Vec<ObjectId>>;

    /// Replaces the given fields on the todo with this id and returns the
    /// post-update document, or `Ok(None)` when the id does not resolve.
    async fn update(&self, id: &str, changes: Document) -> AppResult<Option<Todo>>;

    /// Deletes the todo with this id and returns the removed document, or
    /// `Ok(None)` when the id does not resolve.
    async fn delete(&self, id: &str) -> AppResult<Option<Todo>>;
}

/// Persistence operations for user documents
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Lookup by id. `Ok(None)` when the id does not resolve.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Lookup by login name.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Appends a todo reference to the user's forward list. Returns whether
    /// a user document was matched.
    async fn push_todo(&self, user_id: &str, todo_id: &ObjectId) -> AppResult<bool>;

    /// Removes a todo reference from the user's forward list. Returns
    /// whether a user document was matched.
    async fn pull_todo(&self, user_id: &str, todo_id: &ObjectId) -> AppResult<bool>;
}
