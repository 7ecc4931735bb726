//! API route configuration module
//!
//! Groups the RESTful endpoints by feature and wires them to their handlers.
//! The todo scope is wrapped by the session gate as a whole, so no todo
//! handler is reachable without a verified session; the auth scope stays
//! public because it issues the sessions in the first place.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// Registers every route of the service
///
/// # Arguments
///
/// * `cfg` - Actix-web service configuration object
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_todo_routes(cfg);
    configure_auth_routes(cfg);
}

/// Registers the todo resource routes
///
/// The whole scope is session protected. Fixed paths are registered before
/// the `{id}` routes so they are matched first; `/active-callback` is a
/// plain alias of `/active` and shares its handler.
///
/// # Arguments
///
/// * `cfg` - Actix-web service configuration object
fn configure_todo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/todos")
            .wrap(AuthMiddleware::required())
            .route("", web::get().to(handlers::todos::list_sample))
            .route("", web::post().to(handlers::todos::create_todo))
            .route("/active", web::get().to(handlers::todos::list_active))
            .route("/active-callback", web::get().to(handlers::todos::list_active))
            .route("/mongo", web::get().to(handlers::todos::list_title_mongo))
            .route("/language", web::get().to(handlers::todos::list_title_language))
            .route("/all", web::post().to(handlers::todos::create_many))
            .route("/{id}", web::get().to(handlers::todos::get_todo))
            .route("/{id}", web::put().to(handlers::todos::update_todo))
            .route("/{id}", web::delete().to(handlers::todos::delete_todo)),
    );
}

/// Registers the session issuance routes
///
/// # Available routes
///
/// - `POST /api/v1/auth/login` - username/password login
///
/// # Arguments
///
/// * `cfg` - Actix-web service configuration object
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/auth").service(handlers::auth::login));
}

/// Health check endpoint
///
/// Used by load balancers and monitoring to confirm the service is up.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "todo_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT session gate"
        }
    }))
}
