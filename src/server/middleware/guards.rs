//! Authorization guard middleware
//!
//! Each guard wraps one authorization predicate and short-circuits the
//! request pipeline with a JSON error response when it fails. Per request
//! the states are `Unauthenticated -> Authenticated -> {Authorized,
//! Forbidden}`; a passing guard emits nothing and hands the request to the
//! next service.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpResponse};
use futures::future::{ready, Ready};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use crate::auth::rbac::{role_registry, AuthenticatedUser, Permission, Role};

/// Terminal denial of a request
///
/// Exactly two kinds exist: no identity at all, or an identity with
/// insufficient rights. Both are deterministic and non-retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No user attached to the request
    Unauthenticated,
    /// Role or permission mismatch
    InsufficientPermissions,
    /// Route is restricted to the YoBot team
    InternalTeamRequired,
    /// Client-role user without a client scope
    ClientScopeRequired,
}

impl Denial {
    /// HTTP status for this denial
    pub fn status(&self) -> StatusCode {
        match self {
            Denial::Unauthenticated => StatusCode::UNAUTHORIZED,
            Denial::InsufficientPermissions
            | Denial::InternalTeamRequired
            | Denial::ClientScopeRequired => StatusCode::FORBIDDEN,
        }
    }

    /// Error message sent in the response body
    pub fn message(&self) -> &'static str {
        match self {
            Denial::Unauthenticated => "Authentication required",
            Denial::InsufficientPermissions => "Insufficient permissions",
            Denial::InternalTeamRequired => "YoBot team access required",
            Denial::ClientScopeRequired => "Client access required",
        }
    }
}

/// Structured error body emitted on denial
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// One authorization check, evaluated against the request's user
#[derive(Debug, Clone)]
pub enum GuardPolicy {
    /// Any authenticated user passes
    Authenticated,
    /// Only the listed roles pass
    Role(Vec<Role>),
    /// Only roles granting this permission pass
    Permission(Permission),
    /// Only YoBot team roles pass
    InternalTeam,
    /// Internal users pass; client users pass only with a client scope
    ClientScope,
}

impl GuardPolicy {
    /// Evaluate this policy against the user attached to a request
    ///
    /// Pure and side-effect free; every guard decision reduces to this.
    pub fn evaluate(&self, user: Option<&AuthenticatedUser>) -> Result<(), Denial> {
        let user = user.ok_or(Denial::Unauthenticated)?;

        match self {
            GuardPolicy::Authenticated => Ok(()),
            GuardPolicy::Role(allowed) => {
                if allowed.contains(&user.role) {
                    Ok(())
                } else {
                    Err(Denial::InsufficientPermissions)
                }
            }
            GuardPolicy::Permission(permission) => {
                if role_registry()
                    .permissions_for(user.role)
                    .contains(permission)
                {
                    Ok(())
                } else {
                    Err(Denial::InsufficientPermissions)
                }
            }
            GuardPolicy::InternalTeam => {
                if user.role.is_internal() {
                    Ok(())
                } else {
                    Err(Denial::InternalTeamRequired)
                }
            }
            GuardPolicy::ClientScope => {
                if user.role.is_internal() || user.client_id.is_some() {
                    Ok(())
                } else {
                    Err(Denial::ClientScopeRequired)
                }
            }
        }
    }
}

/// Guard middleware for Actix-web
///
/// Construct with one of the `require_*` constructors and attach with
/// `.wrap()` on a scope or resource.
pub struct AccessGuard {
    policy: GuardPolicy,
}

impl AccessGuard {
    /// Fail with 401 when no user is attached to the request
    pub fn require_auth() -> Self {
        Self {
            policy: GuardPolicy::Authenticated,
        }
    }

    /// Fail with 403 unless the user's role is one of `allowed`
    pub fn require_role(allowed: Vec<Role>) -> Self {
        Self {
            policy: GuardPolicy::Role(allowed),
        }
    }

    /// Fail with 403 unless the user's role grants `permission`
    pub fn require_permission(permission: Permission) -> Self {
        Self {
            policy: GuardPolicy::Permission(permission),
        }
    }

    /// Fail with 403 unless the user belongs to the YoBot team
    pub fn require_internal_team() -> Self {
        Self {
            policy: GuardPolicy::InternalTeam,
        }
    }

    /// Fail with 403 when a client-role user carries no client scope
    pub fn require_client_scope() -> Self {
        Self {
            policy: GuardPolicy::ClientScope,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AccessGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGuardService {
            service,
            policy: self.policy.clone(),
        }))
    }
}

/// Service implementation for the guard middleware
pub struct AccessGuardService<S> {
    service: S,
    policy: GuardPolicy,
}

impl<S, B> Service<ServiceRequest> for AccessGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();

        match self.policy.evaluate(user.as_ref()) {
            Ok(()) => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(denial) => {
                debug!(
                    path = %req.path(),
                    reason = denial.message(),
                    "Request denied"
                );

                let response = HttpResponse::build(denial.status())
                    .json(ErrorBody {
                        error: denial.message(),
                    })
                    .map_into_right_body();

                Box::pin(ready(Ok(req.into_response(response))))
            }
        }
    }
}
