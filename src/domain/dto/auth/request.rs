//! Login request DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials for the local login endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
