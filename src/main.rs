//! Todo service main application
//!
//! Boots the actix-web HTTP server: loads the environment profile, connects
//! to MongoDB, constructs the repositories once and hands them to the app as
//! trait objects, then serves the session-protected REST API.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;

use todo_service_backend::config::ServerConfig;
use todo_service_backend::db::Database;
use todo_service_backend::repositories::{
    MongoTodoRepository, MongoUserRepository, TodoStore, UserStore,
};
use todo_service_backend::routes::configure_all_routes;

/// Rate limiting settings
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Starting todo service...");

    let (todo_store, user_store) = initialize_repositories().await;

    info!("✅ Repositories ready");

    start_http_server(todo_store, user_store).await
}

/// Configures and runs the HTTP server
///
/// Wraps the app in rate limiting, CORS, request logging and path
/// normalization middleware, then registers all routes.
///
/// # Errors
///
/// * `std::io::Error` - port binding failure or server runtime error
async fn start_http_server(
    todo_store: Arc<dyn TodoStore>,
    user_store: Arc<dyn UserStore>,
) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!(
        "🌐 Server running at http://{}:{}",
        bind_address.0, bind_address.1
    );
    info!(
        "📍 Health check: http://{}:{}/health",
        bind_address.0, bind_address.1
    );

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .expect("invalid rate limiting configuration");

    info!(
        "🛡️ Rate limiting enabled: {} req/s, burst {}",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate limiting first
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // Repositories as trait objects
            .app_data(web::Data::from(todo_store.clone()))
            .app_data(web::Data::from(user_store.clone()))
            // Routes
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// Loads the profile-specific env file
///
/// # Environment Variables
///
/// * `PROFILE=dev` - loads .env.dev (default)
/// * `PROFILE=prod` - loads .env.prod
/// * anything else - loads the plain .env file
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod loaded"),
            Err(e) => error!("failed to load .env.prod: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev loaded"),
            Err(e) => error!("failed to load .env.dev: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("default .env loaded");
        }
    }
}

/// Initializes the logging system
///
/// # Environment Variables
///
/// * `RUST_LOG` - log filter (default: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// Connects to MongoDB and constructs the repositories
///
/// Creates the collection indexes once the connection is up, then returns
/// the repositories as trait objects ready for injection.
///
/// # Panics
///
/// * MongoDB connection or index creation failure
async fn initialize_repositories() -> (Arc<dyn TodoStore>, Arc<dyn UserStore>) {
    info!("📡 Connecting to the database...");

    let database = Arc::new(Database::new().await.expect("MongoDB connection failed"));

    let todo_repo = Arc::new(MongoTodoRepository::new(database.clone()));
    let user_repo = Arc::new(MongoUserRepository::new(database));

    todo_repo
        .create_indexes()
        .await
        .expect("todo index creation failed");
    user_repo
        .create_indexes()
        .await
        .expect("user index creation failed");

    (todo_repo, user_repo)
}

/// Builds the CORS policy
///
/// Allows the local frontend origins used during development.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// Loads the rate limiting settings from the environment
///
/// * `RATE_LIMIT_PER_SECOND` - allowed requests per second (default: 100)
/// * `RATE_LIMIT_BURST_SIZE` - burst allowance (default: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("failed to parse RATE_LIMIT_PER_SECOND: {}. Using default 100", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("failed to parse RATE_LIMIT_BURST_SIZE: {}. Using default 200", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate limiting configuration loaded: {:?}", config);
    config
}
