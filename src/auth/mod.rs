//! Authorization system
//!
//! Authentication itself (token verification, session management) lives in
//! the upstream identity proxy; this crate only decides what an already
//! authenticated user may do.

pub mod rbac;

pub use rbac::{AccessLevel, AuthenticatedUser, Permission, Role, RoleRegistry};
