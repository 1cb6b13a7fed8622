//! Helper functions for middleware

use actix_web::http::header::HeaderMap;
use tracing::warn;
use uuid::Uuid;

use crate::auth::rbac::{AuthenticatedUser, Role};

/// Header carrying the authenticated user id, set by the auth proxy
pub const USER_ID_HEADER: &str = "x-auth-user-id";
/// Header carrying the authenticated user's role
pub const ROLE_HEADER: &str = "x-auth-role";
/// Header carrying the client account scope, when present
pub const CLIENT_ID_HEADER: &str = "x-auth-client-id";

/// Extract the authenticated user from the identity headers
///
/// The role string crosses a trust boundary here and is validated before
/// it becomes a typed [`Role`]; an unknown role drops the whole identity
/// rather than guessing.
pub fn extract_identity(headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let id = headers
        .get(USER_ID_HEADER)?
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw).ok())?;

    let role_raw = headers.get(ROLE_HEADER)?.to_str().ok()?;
    let role = match role_raw.parse::<Role>() {
        Ok(role) => role,
        Err(_) => {
            warn!(role = role_raw, "Unknown role in identity headers, dropping identity");
            return None;
        }
    };

    let client_id = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|raw| !raw.is_empty())
        .map(str::to_owned);

    // Account creation should never produce this state; see require_client_scope
    if role.is_client() && client_id.is_none() {
        warn!(user = %id, %role, "Client-role user without a client scope");
    }

    Some(AuthenticatedUser {
        id,
        role,
        client_id,
    })
}

/// Check if a route is public (doesn't require an identity)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health"];

    PUBLIC_ROUTES.iter().any(|&route| path.starts_with(route))
}
