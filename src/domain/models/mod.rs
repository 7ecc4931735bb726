//! Request-scoped models
//!
//! Types produced by the session gate and embedded in tokens, as opposed to
//! entities persisted in the store.

pub mod auth;
pub mod token;
