//! Todo resource handlers
//!
//! All routes live under `/api/v1/todos` behind the session gate; the route
//! table is wired in [`crate::routes`]. Listing variants that differ only in
//! invocation style in the API surface (`/active` vs `/active-callback`,
//! `/mongo` vs `/language`) share one implementation here and differ only in
//! the route or the search term.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `` | sample view, owner expanded, capped at 2 |
//! | `GET` | `/active` | active todos |
//! | `GET` | `/active-callback` | alias of `/active` |
//! | `GET` | `/mongo` | todos whose title contains "mongo" |
//! | `GET` | `/language` | todos whose title contains "mongodb" |
//! | `GET` | `/{id}` | one todo, projected |
//! | `POST` | `` | create one todo for the caller |
//! | `POST` | `/all` | create a batch of todos |
//! | `PUT` | `/{id}` | partial update |
//! | `DELETE` | `/{id}` | delete |

use actix_web::{HttpResponse, web};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::dto::todos::{
    CreateTodoRequest, MessageResponse, PopulatedTodoResponse, TodoListResponse, TodoResponse,
    UpdateTodoRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::{TodoStore, UserStore};

/// Search term behind `GET /mongo`
const MONGO_TITLE_TERM: &str = "mongo";

/// Search term behind `GET /language`
const LANGUAGE_TITLE_TERM: &str = "mongodb";

/// Sample listing with the owner expanded inline
///
/// # Endpoint
///
/// `GET /api/v1/todos`
///
/// Returns at most two records matching the repository's sample condition.
/// The owner reference is expanded to `{name, username}`; a reference that
/// does not resolve renders as `null`. Store ids and dates are projected
/// away.
pub async fn list_sample(
    user: AuthenticatedUser,
    todo_store: web::Data<dyn TodoStore>,
    user_store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    log::debug!("sample listing requested by {}", user.username);

    let todos = todo_store.find_sample().await?;

    let mut expanded = Vec::with_capacity(todos.len());
    for todo in todos {
        let owner = user_store.find_by_id(&todo.user.to_hex()).await?;
        expanded.push(PopulatedTodoResponse::new(todo, owner));
    }

    Ok(HttpResponse::Ok().json(expanded))
}

/// Active todos
///
/// # Endpoint
///
/// `GET /api/v1/todos/active` (also served at `/active-callback`)
pub async fn list_active(
    todo_store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, AppError> {
    let todos = todo_store.find_active().await?;

    Ok(HttpResponse::Ok().json(TodoListResponse::from(todos)))
}

/// Todos whose title contains "mongo"
///
/// # Endpoint
///
/// `GET /api/v1/todos/mongo`
pub async fn list_title_mongo(
    todo_store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, AppError> {
    title_listing(&todo_store, MONGO_TITLE_TERM).await
}

/// Todos whose title contains "mongodb"
///
/// # Endpoint
///
/// `GET /api/v1/todos/language`
pub async fn list_title_language(
    todo_store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, AppError> {
    title_listing(&todo_store, LANGUAGE_TITLE_TERM).await
}

/// Shared implementation of the title-substring listings.
async fn title_listing(
    todo_store: &web::Data<dyn TodoStore>,
    term: &str,
) -> Result<HttpResponse, AppError> {
    let todos = todo_store.find_by_title_containing(term).await?;

    Ok(HttpResponse::Ok().json(TodoListResponse::from(todos)))
}

/// One todo by id
///
/// # Endpoint
///
/// `GET /api/v1/todos/{id}`
///
/// # Errors
///
/// * 404 - no todo with this id
pub async fn get_todo(
    path: web::Path<String>,
    todo_store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, AppError> {
    let todo = todo_store
        .find_by_id(&path)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

/// Create one todo owned by the caller
///
/// # Endpoint
///
/// `POST /api/v1/todos`
///
/// The payload is merged with the caller's user id from the session. Two
/// writes happen: the todo insert, then the append of the new id to the
/// owner's forward list. The pair is not transactional; when the append
/// fails the inserted todo is removed again (best effort) and the request
/// fails, so a success response always means both writes are in place.
pub async fn create_todo(
    user: AuthenticatedUser,
    payload: web::Json<CreateTodoRequest>,
    todo_store: web::Data<dyn TodoStore>,
    user_store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let owner = ObjectId::parse_str(&user.user_id)
        .map_err(|_| AppError::AuthenticationError("Invalid session subject".to_string()))?;

    let todo_id = todo_store.insert(payload.into_inner().into_todo(owner)).await?;

    match user_store.push_todo(&user.user_id, &todo_id).await {
        Ok(matched) => {
            if !matched {
                log::warn!(
                    "owner {} not found while appending todo {}",
                    user.user_id,
                    todo_id.to_hex()
                );
            }
        }
        Err(err) => {
            log::error!(
                "owner list append failed for todo {}, rolling back insert: {}",
                todo_id.to_hex(),
                err
            );
            if let Err(rollback_err) = todo_store.delete(&todo_id.to_hex()).await {
                log::error!(
                    "rollback of todo {} failed: {}",
                    todo_id.to_hex(),
                    rollback_err
                );
            }
            return Err(err);
        }
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo was inserted successfully!")))
}

/// Create a batch of todos owned by the caller
///
/// # Endpoint
///
/// `POST /api/v1/todos/all`
///
/// The whole batch is validated before anything is written; one invalid item
/// rejects the entire request. Unlike the single create, no owner forward
/// list append is performed for the batch.
pub async fn create_many(
    user: AuthenticatedUser,
    payload: web::Json<Vec<CreateTodoRequest>>,
    todo_store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, AppError> {
    for (index, item) in payload.iter().enumerate() {
        item.validate()
            .map_err(|e| AppError::ValidationError(format!("item {}: {}", index, e)))?;
    }

    let owner = ObjectId::parse_str(&user.user_id)
        .map_err(|_| AppError::AuthenticationError("Invalid session subject".to_string()))?;

    let todos = payload
        .into_inner()
        .into_iter()
        .map(|item| item.into_todo(owner))
        .collect();

    todo_store.insert_many(todos).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Todos were inserted successfully!")))
}

/// Partially update a todo
///
/// # Endpoint
///
/// `PUT /api/v1/todos/{id}`
///
/// Replaces exactly the fields present in the payload. The post-update
/// document is requested from the store but only a success message is
/// echoed back.
///
/// # Errors
///
/// * 404 - no todo with this id
pub async fn update_todo(
    path: web::Path<String>,
    payload: web::Json<UpdateTodoRequest>,
    todo_store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let changes = payload
        .into_inner()
        .into_update_document()
        .map_err(|e| AppError::InternalError(format!("update serialization failed: {}", e)))?;

    // An empty $set is rejected by the store; an empty payload degrades to
    // an existence check.
    let updated = if changes.is_empty() {
        todo_store.find_by_id(&path).await?
    } else {
        todo_store.update(&path, changes).await?
    };

    updated.ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo was updated successfully!")))
}

/// Delete a todo
///
/// # Endpoint
///
/// `DELETE /api/v1/todos/{id}`
///
/// Also removes the id from the owner's forward list so the two directions
/// of the ownership relation do not drift; that repair is best effort and
/// never fails the request once the todo itself is gone.
///
/// # Errors
///
/// * 404 - no todo with this id
pub async fn delete_todo(
    path: web::Path<String>,
    todo_store: web::Data<dyn TodoStore>,
    user_store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let deleted = todo_store
        .delete(&path)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    if let Some(ref todo_id) = deleted.id {
        if let Err(err) = user_store.pull_todo(&deleted.user.to_hex(), todo_id).await {
            log::warn!(
                "owner list cleanup failed for deleted todo {}: {}",
                todo_id.to_hex(),
                err
            );
        }
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo was deleted successfully!")))
}
