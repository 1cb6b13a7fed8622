//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::AppConfig;

/// HTTP server state shared across handlers
///
/// Everything in here is read-only after startup, so cloning the state per
/// worker is cheap and needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
