//! Logging initialization

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::utils::error::{CommandCenterError, Result};

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CommandCenterError::Config(format!("invalid log filter: {}", e)))?;

    if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    Ok(())
}
