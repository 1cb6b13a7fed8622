//! Middleware tests

use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::http::StatusCode;
use uuid::Uuid;

use super::guards::{Denial, GuardPolicy};
use super::helpers::{extract_identity, is_public_route};
use crate::auth::rbac::{AuthenticatedUser, Permission, Role};

fn user(role: Role, client_id: Option<&str>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        role,
        client_id: client_id.map(str::to_owned),
    }
}

fn identity_headers(id: &str, role: &str, client_id: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-auth-user-id"),
        HeaderValue::from_str(id).unwrap(),
    );
    headers.insert(
        HeaderName::from_static("x-auth-role"),
        HeaderValue::from_str(role).unwrap(),
    );
    if let Some(client_id) = client_id {
        headers.insert(
            HeaderName::from_static("x-auth-client-id"),
            HeaderValue::from_str(client_id).unwrap(),
        );
    }
    headers
}

#[test]
fn every_policy_requires_a_user() {
    let policies = [
        GuardPolicy::Authenticated,
        GuardPolicy::Role(vec![Role::Admin]),
        GuardPolicy::Permission(Permission::ViewDashboard),
        GuardPolicy::InternalTeam,
        GuardPolicy::ClientScope,
    ];

    for policy in policies {
        assert_eq!(policy.evaluate(None), Err(Denial::Unauthenticated));
    }
}

#[test]
fn authenticated_policy_passes_any_user() {
    let policy = GuardPolicy::Authenticated;
    assert_eq!(policy.evaluate(Some(&user(Role::Admin, None))), Ok(()));
    assert_eq!(
        policy.evaluate(Some(&user(Role::Editor, Some("abc")))),
        Ok(())
    );
}

#[test]
fn role_policy_checks_membership() {
    let policy = GuardPolicy::Role(vec![Role::Admin]);

    assert_eq!(policy.evaluate(Some(&user(Role::Admin, None))), Ok(()));
    assert_eq!(
        policy.evaluate(Some(&user(Role::Manager, Some("abc")))),
        Err(Denial::InsufficientPermissions)
    );
}

#[test]
fn permission_policy_consults_the_registry() {
    let policy = GuardPolicy::Permission(Permission::BotConfig);

    assert_eq!(policy.evaluate(Some(&user(Role::Owner, Some("abc")))), Ok(()));
    assert_eq!(
        policy.evaluate(Some(&user(Role::Editor, Some("abc")))),
        Err(Denial::InsufficientPermissions)
    );
}

#[test]
fn internal_team_policy_rejects_client_roles() {
    let policy = GuardPolicy::InternalTeam;

    for role in Role::INTERNAL {
        assert_eq!(policy.evaluate(Some(&user(role, None))), Ok(()));
    }
    assert_eq!(
        policy.evaluate(Some(&user(Role::Owner, Some("abc")))),
        Err(Denial::InternalTeamRequired)
    );
}

#[test]
fn client_scope_policy_cases() {
    let policy = GuardPolicy::ClientScope;

    // Internal users pass without a client id
    assert_eq!(policy.evaluate(Some(&user(Role::Admin, None))), Ok(()));
    // Client users need a client id
    assert_eq!(policy.evaluate(Some(&user(Role::Owner, Some("abc")))), Ok(()));
    assert_eq!(
        policy.evaluate(Some(&user(Role::Owner, None))),
        Err(Denial::ClientScopeRequired)
    );
}

#[test]
fn denial_statuses_and_messages() {
    assert_eq!(Denial::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(Denial::Unauthenticated.message(), "Authentication required");

    assert_eq!(
        Denial::InsufficientPermissions.status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        Denial::InsufficientPermissions.message(),
        "Insufficient permissions"
    );

    assert_eq!(Denial::InternalTeamRequired.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        Denial::InternalTeamRequired.message(),
        "YoBot team access required"
    );

    assert_eq!(Denial::ClientScopeRequired.status(), StatusCode::FORBIDDEN);
    assert_eq!(Denial::ClientScopeRequired.message(), "Client access required");
}

#[test]
fn extract_identity_happy_path() {
    let id = Uuid::new_v4();
    let headers = identity_headers(&id.to_string(), "owner", Some("client-7"));

    let user = extract_identity(&headers).expect("identity should parse");
    assert_eq!(user.id, id);
    assert_eq!(user.role, Role::Owner);
    assert_eq!(user.client_id.as_deref(), Some("client-7"));
}

#[test]
fn extract_identity_internal_user_without_client() {
    let id = Uuid::new_v4();
    let headers = identity_headers(&id.to_string(), "support", None);

    let user = extract_identity(&headers).expect("identity should parse");
    assert_eq!(user.role, Role::Support);
    assert!(user.client_id.is_none());
}

#[test]
fn extract_identity_unknown_role_fails_closed() {
    let headers = identity_headers(&Uuid::new_v4().to_string(), "guest", Some("abc"));
    assert!(extract_identity(&headers).is_none());
}

#[test]
fn extract_identity_requires_all_mandatory_headers() {
    assert!(extract_identity(&HeaderMap::new()).is_none());

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-auth-role"),
        HeaderValue::from_static("admin"),
    );
    assert!(extract_identity(&headers).is_none());

    let headers = identity_headers("not-a-uuid", "admin", None);
    assert!(extract_identity(&headers).is_none());
}

#[test]
fn public_routes() {
    assert!(is_public_route("/health"));
    assert!(!is_public_route("/api/auth/me"));
    assert!(!is_public_route("/api/admin/permissions"));
}
