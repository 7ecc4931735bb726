//! # HTTP Request Handlers Module
//!
//! Handler functions for the HTTP endpoints. Each handler validates its
//! input, performs one or two repository calls and shapes the result into a
//! response; business state lives entirely in the store.
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Session Gate - Bearer JWT verification        ← Middleware
//! ├─────────────────────────────────────────────┤
//!   Handlers (this module) - endpoint logic       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - data access                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`todos`]: the todo resource (listings, CRUD)
//! - [`auth`]: session token issuance

pub mod auth;
pub mod todos;
