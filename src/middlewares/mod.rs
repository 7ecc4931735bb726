//! Request middlewares

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
