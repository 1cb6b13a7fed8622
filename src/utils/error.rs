//! Error handling for the Command Center
//!
//! This module defines all error types used throughout the service.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the Command Center
pub type Result<T> = std::result::Result<T, CommandCenterError>;

/// Main error type for the Command Center
#[derive(Error, Debug)]
pub enum CommandCenterError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for CommandCenterError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            CommandCenterError::Auth(_) => actix_web::http::StatusCode::UNAUTHORIZED,
            CommandCenterError::Authorization(_) => actix_web::http::StatusCode::FORBIDDEN,
            CommandCenterError::Config(_)
            | CommandCenterError::Io(_)
            | CommandCenterError::Serialization(_)
            | CommandCenterError::Yaml(_)
            | CommandCenterError::Internal(_) => {
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Never leak internals to the client
            CommandCenterError::Config(_) | CommandCenterError::Yaml(_) => {
                "Configuration error".to_string()
            }
            CommandCenterError::Io(_)
            | CommandCenterError::Serialization(_)
            | CommandCenterError::Internal(_) => "Internal server error".to_string(),
            CommandCenterError::Auth(_) | CommandCenterError::Authorization(_) => self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}
