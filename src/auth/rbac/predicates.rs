//! Authorization predicates
//!
//! Pure yes/no questions about a user's access, built on top of the
//! registry. All predicates are deterministic and idempotent; unknown or
//! inconsistent input always answers "no".

use serde::Serialize;

use super::registry::role_registry;
use super::types::{AccessLevel, AuthenticatedUser, Permission};

/// Whether `user`'s role grants `permission`
pub fn has_permission(user: &AuthenticatedUser, permission: Permission) -> bool {
    role_registry()
        .permissions_for(user.role)
        .contains(&permission)
}

/// Whether `user` belongs to the YoBot team
pub fn is_internal_user(user: &AuthenticatedUser) -> bool {
    user.role.is_internal()
}

/// Whether `user` is scoped to a client account
pub fn is_client_user(user: &AuthenticatedUser) -> bool {
    user.role.is_client()
}

/// Access level for `user`
pub fn access_level_of(user: &AuthenticatedUser) -> AccessLevel {
    user.role.access_level()
}

/// Redirect target applied after login
pub fn post_login_destination(user: &AuthenticatedUser) -> &'static str {
    access_level_of(user).post_login_destination()
}

/// Which client data a user may see
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "client_id")]
pub enum DataScope {
    /// Internal users see every client account
    AllClients,
    /// Client users see only their own account
    Client(String),
}

/// Data visibility scope for `user`
///
/// `None` marks the inconsistent state of a client-role user with no
/// `client_id`; callers must treat it as no access.
pub fn data_scope(user: &AuthenticatedUser) -> Option<DataScope> {
    if user.role.is_internal() {
        Some(DataScope::AllClients)
    } else {
        user.client_id.clone().map(DataScope::Client)
    }
}
