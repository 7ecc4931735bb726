//! Session token issuance handlers
//!
//! The login endpoint is the producer side of the session gate: it checks
//! credentials against the user store and returns the Bearer token the gate
//! verifies on every protected route.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::config::JwtConfig;
use crate::domain::dto::auth::{LoginRequest, LoginResponse};
use crate::errors::AppError;
use crate::repositories::UserStore;
use crate::services::auth::TokenService;

/// Local login handler
///
/// # Endpoint
///
/// `POST /api/v1/auth/login`
///
/// # Request body
///
/// ```json
/// {"username": "jane", "password": "secret"}
/// ```
///
/// # Responses
///
/// * 200 - `{access_token, token_type, expires_in}`
/// * 400 - missing credentials
/// * 401 - unknown user or wrong password (indistinguishable on purpose)
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    user_store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_store
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("Invalid username or password".to_string()))?;

    let password_matches = bcrypt::verify(&payload.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("password verification failed: {}", e)))?;

    if !password_matches {
        return Err(AppError::AuthenticationError(
            "Invalid username or password".to_string(),
        ));
    }

    let access_token = TokenService::new().generate_access_token(&user)?;

    log::info!("session issued for user {}", user.username);

    Ok(HttpResponse::Ok().json(LoginResponse::new(
        access_token,
        JwtConfig::expiration_hours() * 3600,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use std::sync::{Arc, Mutex};

    use crate::domain::entities::users::User;
    use crate::errors::AppResult;

    #[derive(Default)]
    struct FakeUserStore {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserStore for FakeUserStore {
        async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
            let oid = ObjectId::parse_str(id)
                .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == Some(oid))
                .cloned())
        }

        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn push_todo(&self, _user_id: &str, _todo_id: &ObjectId) -> AppResult<bool> {
            Ok(false)
        }

        async fn pull_todo(&self, _user_id: &str, _todo_id: &ObjectId) -> AppResult<bool> {
            Ok(false)
        }
    }

    fn seeded_store(username: &str, password: &str) -> (Arc<FakeUserStore>, ObjectId) {
        let store = Arc::new(FakeUserStore::default());
        let hash = bcrypt::hash(password, 4).unwrap();
        let mut user = User::new("Jane".into(), username.into(), hash);
        let user_id = ObjectId::new();
        user.id = Some(user_id);
        store.users.lock().unwrap().push(user);
        (store, user_id)
    }

    macro_rules! spawn_app {
        ($store:expr) => {{
            let user_store: Arc<dyn UserStore> = $store.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::from(user_store))
                    .service(web::scope("/api/v1/auth").service(login)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_login_issues_verifiable_token() {
        let (store, user_id) = seeded_store("jane", "secret");
        let app = spawn_app!(store);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({"username": "jane", "password": "secret"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["token_type"], "Bearer");

        let claims = TokenService::new()
            .verify_token(body["access_token"].as_str().unwrap())
            .unwrap();
        assert_eq!(claims.sub, user_id.to_hex());
        assert_eq!(claims.username, "jane");
    }

    #[actix_web::test]
    async fn test_login_rejects_wrong_password() {
        let (store, _) = seeded_store("jane", "secret");
        let app = spawn_app!(store);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({"username": "jane", "password": "wrong"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_login_rejects_unknown_user() {
        let (store, _) = seeded_store("jane", "secret");
        let app = spawn_app!(store);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({"username": "nobody", "password": "secret"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_login_rejects_blank_credentials() {
        let (store, _) = seeded_store("jane", "secret");
        let app = spawn_app!(store);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({"username": "", "password": ""}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 400);
    }
}
