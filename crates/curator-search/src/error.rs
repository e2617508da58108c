//! Search error types.

use thiserror::Error;

use curator_corpus::CorpusError;

/// Errors from searching the corpus.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The corpus could not be listed or loaded
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
