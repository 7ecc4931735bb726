//! Service layer
//!
//! Cross-cutting logic that is neither HTTP shaping nor data access.

pub mod auth;
