//! Analyzer report types.

use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// Structural counters for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DocumentStats {
    /// Raw line count, including the metadata header
    pub lines: usize,
    /// Whitespace-separated word count of the body
    pub words: usize,
    /// Heading lines in the body
    pub headings: usize,
    /// Fenced code blocks (fence pairs)
    pub code_blocks: usize,
    /// Inline links in the body
    pub links: usize,
}

/// Result of analyzing one document.
///
/// Issues are problems worth fixing; suggestions pair with them and
/// add advisory notes that are not problems by themselves. The report
/// never mutates anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Filename the analysis ran against
    pub filename: String,

    /// Better filename derived from the first top-level heading, when
    /// one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_filename: Option<String>,

    /// Metadata header as decoded at analysis time
    pub metadata: Metadata,

    /// Detected quality problems
    pub issues: Vec<String>,

    /// Improvement hints, one per issue plus advisory notes
    pub suggestions: Vec<String>,

    /// Structural counters
    pub stats: DocumentStats,

    /// Vocabulary topics found in the body, at most five
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detected_topics: Vec<String>,
}
