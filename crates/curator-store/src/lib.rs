//! # curator-store
//!
//! Filesystem storage for the document corpus.
//!
//! The corpus is a flat directory of files. This crate wraps the
//! handful of operations the rest of the system needs (list, read,
//! write, delete, stat, exists) and attaches the failed operation and
//! filename to every error so callers can report I/O failures with
//! context.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{CorpusStore, FileInfo};
