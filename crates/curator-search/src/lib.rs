//! Scored document search.

pub mod engine;
pub mod error;

pub use engine::SearchEngine;
pub use error::SearchError;
