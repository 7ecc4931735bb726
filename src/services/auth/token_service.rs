//! Session token management service
//!
//! Issues and verifies the JWT access tokens checked by the session gate.
//! Tokens are signed with HMAC-SHA256 using the configured secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// Session token service
///
/// Stateless; reads the signing secret and lifetime from [`JwtConfig`] on
/// each call.
pub struct TokenService;

impl TokenService {
    pub fn new() -> Self {
        Self
    }

    /// Generates a session access token for a user.
    ///
    /// # Arguments
    ///
    /// * `user` - the account the token identifies; must carry a store id
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the signed JWT
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - missing user id or signing failure
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("user has no id".to_string()))?,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("token generation failed: {}", e)))
    }

    /// Verifies a session token and extracts its claims.
    ///
    /// # Arguments
    ///
    /// * `token` - the raw JWT (without the `Bearer ` prefix)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - expired, malformed or badly
    ///   signed token
    /// * `AppError::InternalError` - any other verification failure
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("Invalid token".to_string())
                }
                _ => AppError::InternalError(format!("token verification failed: {}", e)),
            })
    }

    /// Extracts the token part of a `Bearer {token}` authorization header.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - header does not use the Bearer
    ///   scheme
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("Authorization header must use the Bearer scheme".to_string())
            })
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn user_with_id() -> User {
        let mut user = User::new("Jane".into(), "jane".into(), "hash".into());
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::new();
        let user = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.username, "jane");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_generation_requires_user_id() {
        let service = TokenService::new();
        let user = User::new("Jane".into(), "jane".into(), "hash".into());

        assert!(service.generate_access_token(&user).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = TokenService::new();

        assert!(matches!(
            service.verify_token("not-a-jwt"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_bearer_extraction() {
        let service = TokenService::new();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
