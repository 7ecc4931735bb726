//! Caller identity established by the session gate

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

use crate::errors::AppError;

/// User identity extracted from a verified session token
///
/// Inserted into the request extensions by the session gate middleware and
/// pulled out by handlers through the [`FromRequest`] impl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Owning user id (hex ObjectId string)
    pub user_id: String,

    /// Login name, carried for request logging
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Request is not authenticated".to_string(),
            ))),
        }
    }
}
