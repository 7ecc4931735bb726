//! HTTP data transfer objects
//!
//! Request payloads (deserialization + validation) and response shapes
//! (projection of entities into what the API exposes).

pub mod auth;
pub mod todos;
