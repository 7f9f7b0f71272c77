//! Domain error types

use thiserror::Error;

/// Error when parsing a push payload
#[derive(Debug, Error)]
#[error("Invalid push payload: {0}")]
pub struct PayloadError(#[from] serde_json::Error);

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
