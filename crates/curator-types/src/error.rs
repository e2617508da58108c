//! Error types for the curator system.

use thiserror::Error;

/// Unified error type for curator operations.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Document or identifier does not resolve to a stored file
    #[error("Not found: {0}")]
    NotFound(String),

    /// Document exists but its metadata header cannot be decoded
    #[error("Malformed document {filename}: {reason}")]
    Malformed { filename: String, reason: String },

    /// Filesystem operation failed
    #[error("Storage error: {op} {filename}: {source}")]
    Storage {
        op: String,
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid input rejected before any I/O
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
