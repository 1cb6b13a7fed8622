//! Server construction and startup

use actix_web::{web, App, HttpServer};
use std::path::Path;
use tracing::info;

use crate::auth::rbac::role_registry;
use crate::config::AppConfig;
use crate::server::middleware::IdentityMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::utils::logging;

/// Environment variable naming the config file to load
pub const CONFIG_ENV: &str = "COMMAND_CENTER_CONFIG";

/// Load configuration, initialize logging and run the server until shutdown
pub async fn run_server() -> Result<()> {
    let config_path = std::env::var(CONFIG_ENV).ok();
    let config = AppConfig::load(config_path.as_deref().map(Path::new))?;

    logging::init(&config.logging)?;

    // Warm the registry before accepting traffic
    let registry = role_registry();
    info!(roles = registry.roles().count(), "Role registry initialized");

    let bind_addr = (config.server.host.clone(), config.server.port);
    let state = AppState::new(config);

    info!(host = %bind_addr.0, port = bind_addr.1, "Starting Command Center");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(IdentityMiddleware)
            .configure(routes::health::configure_routes)
            .service(
                web::scope("/api")
                    .configure(routes::auth::configure_routes)
                    .configure(routes::admin::configure_routes)
                    .configure(routes::dashboard::configure_routes),
            )
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
