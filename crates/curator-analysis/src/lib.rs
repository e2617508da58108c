//! Document analysis, normalization, and the process pipeline.
//!
//! Everything here is read-only except [`Processor::process`], which
//! rewrites one document into canonical form: analyzed, with a
//! synthesized metadata header and a normalized body.

pub mod analyzer;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod synthesize;
pub mod topics;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use normalize::Normalizer;
pub use pipeline::{ProcessOutcome, Processor};
pub use synthesize::MetadataSynthesizer;
pub use topics::TopicDetector;
