//! # curator-types
//!
//! Shared domain types for the curator knowledge-base tooling.
//!
//! This crate defines the core data structures used throughout the system:
//! - Documents: corpus entries with resolved metadata and body text
//! - Metadata: the ordered key/value header carried at the top of each file
//! - Reports: analyzer output (stats, issues, suggestions, topics)
//! - Settings: layered configuration
//! - Clock: injectable time source so synthesis stays testable

pub mod clock;
pub mod config;
pub mod document;
pub mod error;
pub mod metadata;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Settings;
pub use document::Document;
pub use error::CuratorError;
pub use metadata::{MetaValue, Metadata};
pub use report::{AnalysisReport, DocumentStats};
