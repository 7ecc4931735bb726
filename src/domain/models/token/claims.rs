//! Session token claims

use serde::{Deserialize, Serialize};

/// Claims embedded in a session access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id (hex ObjectId string)
    pub sub: String,
    /// Login name of the subject
    pub username: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}
