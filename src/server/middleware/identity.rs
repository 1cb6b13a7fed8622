//! Identity middleware
//!
//! The upstream auth proxy authenticates requests and forwards the result
//! in identity headers. This middleware validates those headers and
//! attaches an [`AuthenticatedUser`] to the request extensions for the
//! guards to inspect. It never denies a request itself; a missing or
//! invalid identity simply leaves no user attached.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;

use crate::auth::rbac::AuthenticatedUser;
use crate::server::middleware::helpers::{extract_identity, is_public_route};

/// Identity middleware for Actix-web
pub struct IdentityMiddleware;

impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = IdentityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddlewareService { service }))
    }
}

/// Service implementation for the identity middleware
pub struct IdentityMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !is_public_route(req.path()) {
            if let Some(user) = extract_identity(req.headers()) {
                req.extensions_mut().insert(user);
            }
        }

        Box::pin(self.service.call(req))
    }
}

/// Fetch the authenticated user a guard has already verified
///
/// Handlers behind `require_auth` (or any stricter guard) may rely on the
/// user being present; a miss here means the route was wired without a
/// guard and is a server error, not an authorization failure.
pub fn require_user(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    req.extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Missing authenticated user"))
}
