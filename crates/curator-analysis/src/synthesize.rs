//! Canonical metadata synthesis.
//!
//! Synthesis produces a complete header for a document: explicit
//! values win, absent ones fill from the body or the filename, and
//! the last-updated stamp is always recomputed. The current date
//! comes from an injected clock so rewrites stay testable.

use std::sync::Arc;

use regex::Regex;

use curator_corpus::{derive_excerpt, filename::stem};
use curator_types::{Clock, MetaValue, Metadata, SystemClock};

use crate::error::AnalysisError;

/// Derives a complete, canonical metadata header.
pub struct MetadataSynthesizer {
    clock: Arc<dyn Clock>,
    h1: Regex,
}

impl MetadataSynthesizer {
    pub fn new() -> Result<Self, AnalysisError> {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Result<Self, AnalysisError> {
        Ok(Self {
            clock,
            h1: Regex::new(r"(?m)^#\s+(.+)$")?,
        })
    }

    /// Build the synthesized header for one document.
    ///
    /// Field resolution: title falls back to the first top-level
    /// heading, then the filename stem; description falls back to the
    /// existing excerpt, then a derived one; tags are the union of
    /// existing tags and detected topics; date keeps its existing
    /// value, else today; last_updated is always today. Every other
    /// existing field carries through unchanged, in its source order.
    pub fn synthesize(
        &self,
        filename: &str,
        existing: &Metadata,
        body: &str,
        topics: &[String],
    ) -> Metadata {
        let today = self.clock.today().format("%Y-%m-%d").to_string();

        let title = existing
            .get_str("title")
            .map(str::to_string)
            .or_else(|| {
                self.h1
                    .captures(body)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().trim().to_string())
            })
            .unwrap_or_else(|| stem(filename).to_string());

        let description = existing
            .get_str("description")
            .or_else(|| existing.get_str("excerpt"))
            .map(str::to_string)
            .unwrap_or_else(|| derive_excerpt(body));

        let mut tags = existing.get_items("tags");
        for topic in topics {
            if !tags.contains(topic) {
                tags.push(topic.clone());
            }
        }

        let date = existing
            .get_str("date")
            .map(str::to_string)
            .unwrap_or_else(|| today.clone());

        let mut meta = Metadata::new();
        meta.set("title", title);
        meta.set("description", description);
        meta.set("tags", MetaValue::List(tags));
        meta.set("date", date);
        meta.set("last_updated", today);
        for (key, value) in existing.extras() {
            meta.set(key.to_string(), value.clone());
        }
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use curator_types::FixedClock;

    fn synthesizer() -> MetadataSynthesizer {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        MetadataSynthesizer::with_clock(Arc::new(FixedClock::new(instant))).unwrap()
    }

    #[test]
    fn test_existing_title_wins() {
        let mut existing = Metadata::new();
        existing.set("title", "Explicit");
        let meta = synthesizer().synthesize("notes.md", &existing, "# Heading\n\nBody.\n", &[]);
        assert_eq!(meta.get_str("title"), Some("Explicit"));
    }

    #[test]
    fn test_title_falls_back_to_heading_then_stem() {
        let s = synthesizer();
        let empty = Metadata::new();

        let meta = s.synthesize("notes.md", &empty, "# From Heading\n\nBody.\n", &[]);
        assert_eq!(meta.get_str("title"), Some("From Heading"));

        let meta = s.synthesize("release-notes.md", &empty, "No headings here.\n", &[]);
        assert_eq!(meta.get_str("title"), Some("release-notes"));
    }

    #[test]
    fn test_description_falls_back_to_excerpt_then_body() {
        let s = synthesizer();

        let mut existing = Metadata::new();
        existing.set("excerpt", "Short form");
        let meta = s.synthesize("a.md", &existing, "Body line.\n", &[]);
        assert_eq!(meta.get_str("description"), Some("Short form"));

        let meta = s.synthesize("a.md", &Metadata::new(), "# H\n\nBody line.\n", &[]);
        assert_eq!(meta.get_str("description"), Some("Body line."));
    }

    #[test]
    fn test_tags_union_existing_and_topics() {
        let mut existing = Metadata::new();
        existing.set("tags", MetaValue::List(vec!["go".to_string()]));
        let topics = vec!["docker".to_string(), "go".to_string()];

        let meta = synthesizer().synthesize("a.md", &existing, "Body.\n", &topics);
        assert_eq!(
            meta.get_items("tags"),
            vec!["go".to_string(), "docker".to_string()]
        );
    }

    #[test]
    fn test_date_kept_but_last_updated_recomputed() {
        let mut existing = Metadata::new();
        existing.set("date", "2021-06-01");
        existing.set("last_updated", "2021-06-02");

        let meta = synthesizer().synthesize("a.md", &existing, "Body.\n", &[]);
        assert_eq!(meta.get_str("date"), Some("2021-06-01"));
        assert_eq!(meta.get_str("last_updated"), Some("2024-03-09"));
    }

    #[test]
    fn test_date_defaults_to_today() {
        let meta = synthesizer().synthesize("a.md", &Metadata::new(), "Body.\n", &[]);
        assert_eq!(meta.get_str("date"), Some("2024-03-09"));
    }

    #[test]
    fn test_extra_fields_carry_through_in_order() {
        let mut existing = Metadata::new();
        existing.set("author", "sam");
        existing.set("excerpt", "Keep me");
        existing.set("draft", "true");

        let meta = synthesizer().synthesize("a.md", &existing, "Body.\n", &[]);
        let keys: Vec<&str> = meta.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["title", "description", "tags", "date", "last_updated", "author", "excerpt", "draft"]
        );
        assert_eq!(meta.get_str("excerpt"), Some("Keep me"));
    }
}
