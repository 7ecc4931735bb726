//! Application-wide error system
//!
//! Unified error handling for the backend service. Built on `thiserror` and
//! `actix_web::ResponseError` so every failure path renders the same JSON
//! envelope:
//!
//! ```json
//! {"error": {"kind": "not_found", "message": "Todo not found"}}
//! ```
//!
//! Server-side failures deliberately render a fixed message and log the
//! detail instead of leaking it to the client.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn load_todo(id: &str) -> Result<Todo, AppError> {
//!     todo_store
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))
//! }
//! ```

use thiserror::Error;

/// Message rendered for every 5xx response; the real detail goes to the log.
const SERVER_ERROR_MESSAGE: &str = "There was a server side error";

/// Application-wide error type
///
/// Covers every failure class the service produces. Converted automatically
/// into an HTTP response through [`actix_web::ResponseError`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Document store failure (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Rejected input values (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Id-based lookup, update or delete miss (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session gate rejection (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Anything else that should never reach the client verbatim (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Stable machine-readable class of the error, used in the envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::AuthenticationError(_) => "authentication_error",
            AppError::InternalError(_) => "internal_error",
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::AuthenticationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON error envelope for this error.
    ///
    /// Client errors carry their detail; store and internal failures collapse
    /// to a fixed message with the detail logged at error level.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}: {}", self.kind(), self.detail());
                SERVER_ERROR_MESSAGE
            }
            _ => self.detail(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": {
                "kind": self.kind(),
                "message": message,
            }
        }))
    }
}

/// Convenience alias used throughout the repositories and handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("title is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Todo not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_database_error_collapses_to_server_error() {
        let error = AppError::DatabaseError("connection reset by peer".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(AppError::DatabaseError(String::new()).kind(), "database_error");
        assert_eq!(AppError::NotFound(String::new()).kind(), "not_found");
        assert_eq!(
            AppError::AuthenticationError(String::new()).kind(),
            "authentication_error"
        );
    }
}
