//! End-to-end guard behavior over the HTTP surface
//!
//! Each test drives the same app wiring as the production builder and
//! asserts on the exact status and error body the guards emit.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use uuid::Uuid;

use command_center::config::AppConfig;
use command_center::server::middleware::IdentityMiddleware;
use command_center::server::routes;
use command_center::server::AppState;

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(AppConfig::default())))
                .wrap(IdentityMiddleware)
                .configure(routes::health::configure_routes)
                .service(
                    web::scope("/api")
                        .configure(routes::auth::configure_routes)
                        .configure(routes::admin::configure_routes)
                        .configure(routes::dashboard::configure_routes),
                ),
        )
        .await
    };
}

fn get(path: &str) -> test::TestRequest {
    test::TestRequest::get().uri(path)
}

fn get_as(path: &str, role: &str, client_id: Option<&str>) -> test::TestRequest {
    let mut req = get(path)
        .insert_header(("x-auth-user-id", Uuid::new_v4().to_string()))
        .insert_header(("x-auth-role", role.to_string()));
    if let Some(client_id) = client_id {
        req = req.insert_header(("x-auth-client-id", client_id.to_string()));
    }
    req
}

#[actix_web::test]
async fn health_is_public() {
    let app = init_app!();

    let resp = test::call_service(&app, get("/health").to_request()).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn me_without_identity_is_unauthorized() {
    let app = init_app!();

    let resp = test::call_service(&app, get("/api/auth/me").to_request()).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Authentication required" }));
}

#[actix_web::test]
async fn unknown_role_is_dropped_at_the_boundary() {
    let app = init_app!();

    let req = get_as("/api/auth/me", "guest", Some("abc")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Authentication required" }));
}

#[actix_web::test]
async fn me_reports_identity_and_permissions() {
    let app = init_app!();

    let req = get_as("/api/auth/me", "admin", None).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["role"], "admin");
    assert_eq!(body["data"]["access_level"], "admin");
    assert_eq!(body["data"]["destination"], "/admin");
    let permissions = body["data"]["permissions"].as_array().unwrap();
    assert!(permissions.contains(&json!("full_system_access")));
}

#[actix_web::test]
async fn destination_for_client_roles() {
    let app = init_app!();

    let req = get_as("/api/auth/destination", "owner", Some("abc")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["destination"], "/dashboard");
}

#[actix_web::test]
async fn admin_scope_rejects_client_roles() {
    let app = init_app!();

    let req = get_as("/api/admin/roles", "owner", Some("abc")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "YoBot team access required" }));
}

#[actix_web::test]
async fn admin_scope_admits_the_whole_internal_team() {
    let app = init_app!();

    for role in ["admin", "dev", "support"] {
        let req = get_as("/api/admin/permissions", role, None).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "role {} should pass", role);
    }
}

#[actix_web::test]
async fn system_settings_require_the_admin_role() {
    let app = init_app!();

    let req = get_as("/api/admin/system", "dev", None).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Insufficient permissions" }));

    let req = get_as("/api/admin/system", "admin", None).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn dashboard_requires_a_client_scope() {
    let app = init_app!();

    // Client-role user without a client id is denied
    let req = get_as("/api/dashboard/overview", "owner", None).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Client access required" }));

    // Same role with a client id passes
    let req = get_as("/api/dashboard/overview", "owner", Some("client-7")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["scope"], "client");
    assert_eq!(body["data"]["client_id"], "client-7");

    // Internal users pass without any client id
    let req = get_as("/api/dashboard/overview", "admin", None).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["scope"], "all_clients");
}

#[actix_web::test]
async fn bot_config_needs_the_permission() {
    let app = init_app!();

    let req = get_as("/api/bot/config", "editor", Some("abc")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Insufficient permissions" }));

    let req = get_as("/api/bot/config", "owner", Some("abc")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["can_edit_content"], true);
}

#[actix_web::test]
async fn roi_needs_permission_and_scope() {
    let app = init_app!();

    // Agent has no view_roi grant
    let req = get_as("/api/analytics/roi", "agent", Some("abc")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Insufficient permissions" }));

    // Manager with a client scope sees their own account only
    let req = get_as("/api/analytics/roi", "manager", Some("client-9")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["scope"], "client");
    assert_eq!(body["data"]["client_id"], "client-9");

    // Support is internal and sees every account
    let req = get_as("/api/analytics/roi", "support", None).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["scope"], "all_clients");
}
