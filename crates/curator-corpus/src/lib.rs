//! # curator-corpus
//!
//! Corpus access: filename parsing, the metadata-header codec, and the
//! document loader.
//!
//! Filenames carry structure (`01-deploy-guide.md` yields the slug
//! `01-deploy-guide` and the fallback title `deploy guide`); the codec
//! splits a file into its header mapping and body and serializes a
//! header back into the canonical block syntax; the loader turns files
//! into fully resolved [`curator_types::Document`] values.

pub mod error;
pub mod filename;
pub mod loader;
pub mod matter;

pub use error::CorpusError;
pub use filename::{parse_filename, stem, ParsedFilename};
pub use loader::{derive_excerpt, DocumentLoader};
pub use matter::MatterCodec;
