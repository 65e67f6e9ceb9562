//! Core error types for hallpass-core.
//!
//! The schedule and progression engines are total and never return errors.
//! Everything fallible lives at the edges: parsing the bell schedule,
//! loading configuration and reading or writing the local progress file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hallpass-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A clock string that is not `HH:MM`
    #[error("Malformed clock time '{0}': expected HH:MM")]
    MalformedClock(String),

    /// A block whose end does not come after its start
    #[error("Block '{name}' ends ({end}) before it starts ({start})")]
    InvalidBlock {
        name: String,
        start: String,
        end: String,
    },

    /// Two blocks overlap or are out of order
    #[error("Block '{later}' starts before '{earlier}' ends")]
    OverlappingBlocks { earlier: String, later: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
