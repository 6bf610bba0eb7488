//! Error types for Reply Drafter.
//!
//! The drafting pipeline itself never fails. These errors belong to the
//! layers around it: configuration, template tables, and input channels.

use std::path::PathBuf;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Template table errors.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Unknown email category: {0}")]
    UnknownCategory(String),

    #[error("Category {0} is defined more than once")]
    DuplicateCategory(String),

    #[error("Template table has no Unknown entry to fall back on")]
    MissingFallback,

    #[error("Failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input channel errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Invalid message format: {0}")]
    InvalidMessage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
