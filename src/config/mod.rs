//! Service configuration
//!
//! Configuration is loaded from an optional YAML file, then overridden by
//! environment variables, then validated. Every field has a default so the
//! service runs with no config file at all.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::{CommandCenterError, Result};

/// Top-level service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive (tracing `EnvFilter` syntax)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from `path` (or defaults), apply environment
    /// overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_yaml::from_str(&raw)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Override settings from the environment
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("COMMAND_CENTER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("COMMAND_CENTER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(level) = std::env::var("COMMAND_CENTER_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(CommandCenterError::Config(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(CommandCenterError::Config(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.logging.level.is_empty() {
            return Err(CommandCenterError::Config(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
