//! Session gate middleware
//!
//! Verifies the Bearer JWT on every request entering a protected scope and
//! attaches the caller identity to the request before any handler runs.
//! Requests without a valid token are rejected with 401 and never reach the
//! repository layer.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Session gate
///
/// Wrap a scope with this to require a verified session on every route in
/// it:
///
/// ```rust,ignore
/// web::scope("/api/v1/todos").wrap(AuthMiddleware::required())
/// ```
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Creates the gate. Every request through it must authenticate.
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
