//! Analysis error types.

use thiserror::Error;

use curator_corpus::CorpusError;
use curator_store::StoreError;

/// Errors from analysis, synthesis, and the process pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Document could not be resolved or decoded
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Underlying storage failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Input rejected before any file access
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A built-in pattern failed to compile
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}
