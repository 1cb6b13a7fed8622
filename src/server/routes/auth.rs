//! Session introspection endpoints
//!
//! These endpoints answer "who am I and what may I see" for an already
//! authenticated user.

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::rbac::{self, role_registry, AccessLevel};
use crate::server::middleware::{require_user, AccessGuard};
use crate::server::routes::ApiResponse;

/// Configure session routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .wrap(AccessGuard::require_auth())
            .route("/me", web::get().to(current_user))
            .route("/destination", web::get().to(login_destination)),
    );
}

/// Current user response
#[derive(Debug, Serialize)]
struct MeResponse {
    id: Uuid,
    role: String,
    access_level: AccessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    permissions: Vec<String>,
    destination: &'static str,
}

/// Post-login redirect response
#[derive(Debug, Serialize)]
struct DestinationResponse {
    destination: &'static str,
}

/// Return the caller's identity, access level and effective permissions
async fn current_user(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = require_user(&req)?;

    let mut permissions: Vec<String> = role_registry()
        .permissions_for(user.role)
        .iter()
        .map(ToString::to_string)
        .collect();
    permissions.sort();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MeResponse {
        id: user.id,
        role: user.role.to_string(),
        access_level: rbac::access_level_of(&user),
        client_id: user.client_id.clone(),
        permissions,
        destination: rbac::post_login_destination(&user),
    })))
}

/// Return the fixed redirect target for the caller's access level
async fn login_destination(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = require_user(&req)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(DestinationResponse {
        destination: rbac::post_login_destination(&user),
    })))
}
