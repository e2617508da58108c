//! Document type for corpus entries.
//!
//! A document is one file in the corpus: a metadata header plus a
//! prose body. The loader resolves every display field to either the
//! explicit header value or a computed default, so consumers never
//! deal with absent titles or excerpts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// A fully loaded corpus document.
///
/// The slug is a pure function of the filename (lower-cased, whitespace
/// hyphenated) and addresses the document everywhere in the system.
/// Two files must not collide on slug; if they do, the first found in
/// directory order wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier derived from the filename
    pub slug: String,

    /// Source filename within the corpus directory
    pub filename: String,

    /// Display title: header title, else derived from the filename
    pub title: String,

    /// Header description, else header excerpt, else derived excerpt.
    /// Empty when nothing can be derived from the body.
    pub description: String,

    /// Header excerpt, else the first non-empty non-heading body line
    /// truncated to 200 characters. Empty when nothing qualifies.
    pub excerpt: String,

    /// Tags in header order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Effective date: parsed header date, else file modification time
    pub date: DateTime<Utc>,

    /// File modification time
    pub modified: DateTime<Utc>,

    /// Body text with the header stripped
    pub body: String,

    /// Header fields beyond the ones resolved above, passed through
    /// verbatim
    #[serde(default)]
    pub extra: Metadata,
}
