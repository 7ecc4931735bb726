//! # Configuration Module
//!
//! Centralized, environment-variable based configuration for the backend
//! service. Settings are grouped by concern and exposed through unit structs
//! with static accessors; defaults are only safe for development and missing
//! production-critical values are logged.
//!
//! ## Modules
//!
//! - [`data_config`] - server binding configuration
//! - [`auth_config`] - JWT session token configuration
//!
//! ## Environment variable guide
//!
//! ```bash
//! # Server
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # Session tokens
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # Storage (read by the db module)
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="todo_service_dev"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
