//! HTTP middleware implementations
//!
//! This module provides the request-side access-control plumbing:
//! - Identity extraction from upstream auth-proxy headers
//! - Authorization guards enforcing role/permission predicates

mod guards;
mod helpers;
mod identity;

#[cfg(test)]
mod tests;

// Re-export all middleware
pub use guards::{AccessGuard, AccessGuardService, Denial, GuardPolicy};
pub use helpers::{
    extract_identity, is_public_route, CLIENT_ID_HEADER, ROLE_HEADER, USER_ID_HEADER,
};
pub use identity::{require_user, IdentityMiddleware, IdentityMiddlewareService};
