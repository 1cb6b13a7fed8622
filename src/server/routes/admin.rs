//! Internal (YoBot team) endpoints

use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::auth::rbac::{role_registry, Role};
use crate::server::middleware::AccessGuard;
use crate::server::routes::ApiResponse;
use crate::server::AppState;

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AccessGuard::require_internal_team())
            .route("/roles", web::get().to(list_roles))
            .route("/permissions", web::get().to(permission_matrix))
            .service(
                web::resource("/system")
                    .wrap(AccessGuard::require_role(vec![Role::Admin]))
                    .route(web::get().to(system_settings)),
            ),
    );
}

/// Role summary
#[derive(Debug, Serialize)]
struct RoleSummary {
    role: String,
    access_level: String,
    internal: bool,
}

/// List every role and its access level
async fn list_roles() -> ActixResult<HttpResponse> {
    let roles: Vec<RoleSummary> = role_registry()
        .roles()
        .map(|role| RoleSummary {
            role: role.to_string(),
            access_level: role.access_level().to_string(),
            internal: role.is_internal(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(roles)))
}

/// Dump the full role-to-permission matrix
async fn permission_matrix() -> ActixResult<HttpResponse> {
    let registry = role_registry();

    let matrix: BTreeMap<String, Vec<String>> = registry
        .roles()
        .map(|role| {
            let mut permissions: Vec<String> = registry
                .permissions_for(role)
                .iter()
                .map(ToString::to_string)
                .collect();
            permissions.sort();
            (role.to_string(), permissions)
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(matrix)))
}

/// Current service settings; admin role only
async fn system_settings(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.config.as_ref().clone())))
}
