//! Storage error types.

use thiserror::Error;

/// Errors from corpus directory operations.
///
/// Every variant names the operation and the file it failed on.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Directory could not be created or opened
    #[error("failed to open corpus directory {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory listing failed
    #[error("failed to list {path}: {source}")]
    List {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File read failed
    #[error("failed to read {filename}: {source}")]
    Read {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// File write failed
    #[error("failed to write {filename}: {source}")]
    Write {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// File delete failed
    #[error("failed to delete {filename}: {source}")]
    Delete {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// File metadata lookup failed
    #[error("failed to stat {filename}: {source}")]
    Stat {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}
