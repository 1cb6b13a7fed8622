//! Client-facing dashboard endpoints

use actix_web::{error, web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;

use crate::auth::rbac::{self, AccessLevel, DataScope, Permission};
use crate::server::middleware::{require_user, AccessGuard, Denial};
use crate::server::routes::ApiResponse;

/// Configure dashboard routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard")
            .wrap(AccessGuard::require_client_scope())
            .route("/overview", web::get().to(overview)),
    );
    cfg.service(
        web::scope("/bot")
            .wrap(AccessGuard::require_permission(Permission::BotConfig))
            .route("/config", web::get().to(bot_capabilities)),
    );
    cfg.service(
        web::scope("/analytics")
            .wrap(AccessGuard::require_client_scope())
            .wrap(AccessGuard::require_permission(Permission::ViewRoi))
            .route("/roi", web::get().to(roi_scope)),
    );
}

/// Dashboard overview response
#[derive(Debug, Serialize)]
struct OverviewResponse {
    access_level: AccessLevel,
    #[serde(flatten)]
    scope: DataScope,
    destination: &'static str,
}

/// Bot capability response
#[derive(Debug, Serialize)]
struct BotCapabilities {
    can_edit_content: bool,
    can_use_voice_controls: bool,
}

/// ROI scope response
#[derive(Debug, Serialize)]
struct RoiScopeResponse {
    #[serde(flatten)]
    scope: DataScope,
}

fn scope_or_forbidden(user: &rbac::AuthenticatedUser) -> ActixResult<DataScope> {
    // The client-scope guard makes this unreachable; deny anyway
    rbac::data_scope(user)
        .ok_or_else(|| error::ErrorForbidden(Denial::ClientScopeRequired.message()))
}

/// Dashboard entry point scoped to the caller's client account
async fn overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = require_user(&req)?;
    let scope = scope_or_forbidden(&user)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(OverviewResponse {
        access_level: rbac::access_level_of(&user),
        scope,
        destination: rbac::post_login_destination(&user),
    })))
}

/// Bot configuration surfaces available to the caller
async fn bot_capabilities(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = require_user(&req)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(BotCapabilities {
        can_edit_content: rbac::has_permission(&user, Permission::EditBotContent),
        can_use_voice_controls: rbac::has_permission(&user, Permission::VoiceControls),
    })))
}

/// Which client accounts the caller's ROI reporting covers
async fn roi_scope(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = require_user(&req)?;
    let scope = scope_or_forbidden(&user)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(RoiScopeResponse { scope })))
}
