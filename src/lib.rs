//! # Command Center
//!
//! Role-based access control service for the YoBot Command Center.
//!
//! The crate provides three layers, leaf first:
//!
//! - **Registry** — the closed sets of roles and permissions and the total,
//!   read-only mapping between them ([`auth::rbac::RoleRegistry`]).
//! - **Predicates** — pure functions answering "can this user do X"
//!   ([`auth::rbac::has_permission`] and friends).
//! - **Guards** — actix-web middleware enforcing the predicates at the HTTP
//!   boundary ([`server::middleware::AccessGuard`]).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpResponse, HttpServer};
//! use command_center::server::middleware::{AccessGuard, IdentityMiddleware};
//! use command_center::Permission;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new().wrap(IdentityMiddleware).service(
//!             web::scope("/bot")
//!                 .wrap(AccessGuard::require_permission(Permission::BotConfig))
//!                 .route("/config", web::get().to(HttpResponse::Ok)),
//!         )
//!     })
//!     .bind(("127.0.0.1", 8090))?
//!     .run()
//!     .await
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod config;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    role_registry, AccessLevel, AuthenticatedUser, Permission, Role, RoleRegistry,
};
pub use config::AppConfig;
pub use utils::error::{CommandCenterError, Result};
