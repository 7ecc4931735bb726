//! # Authentication Configuration Module
//!
//! JWT session token settings for the session gate. The gate signs and
//! verifies access tokens with a shared HMAC secret; both sides of that
//! exchange read their parameters from here.

use std::env;

/// JSON Web Token (JWT) settings
///
/// Governs how session tokens are signed and how long they stay valid.
pub struct JwtConfig;

impl JwtConfig {
    /// Returns the secret used to sign and verify session tokens.
    ///
    /// # Default
    ///
    /// Falls back to a development-only value when `JWT_SECRET` is unset and
    /// logs a warning, since the default is not safe for production.
    ///
    /// # Key generation
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// Returns the access token lifetime in hours.
    ///
    /// # Default
    ///
    /// 24 hours.
    ///
    /// # Environment variable
    ///
    /// ```bash
    /// export JWT_EXPIRATION_HOURS="1"
    /// ```
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}
