//! Role-Based Access Control (RBAC)
//!
//! This module provides the role/permission registry and the authorization
//! predicates built on top of it. The registry is constant, process-wide
//! state; everything here is pure and synchronous.

mod predicates;
mod registry;
mod types;


pub use predicates::{
    access_level_of, data_scope, has_permission, is_client_user, is_internal_user,
    post_login_destination, DataScope,
};
pub use registry::{role_registry, RoleRegistry};
pub use types::{AccessLevel, AuthenticatedUser, Permission, Role};
