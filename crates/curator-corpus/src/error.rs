//! Corpus error types.

use thiserror::Error;

use curator_store::StoreError;

/// Errors from loading and decoding corpus documents.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// No document resolves to the given slug
    #[error("no document found for slug '{0}'")]
    NotFound(String),

    /// Document exists but cannot be decoded
    #[error("malformed document {filename}: {reason}")]
    Malformed { filename: String, reason: String },

    /// Input rejected before any file access
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Underlying storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CorpusError {
    /// Shorthand for a malformed-document error.
    pub fn malformed(filename: &str, reason: impl Into<String>) -> Self {
        CorpusError::Malformed {
            filename: filename.to_string(),
            reason: reason.into(),
        }
    }
}
