//! Structural and quality analysis of stored documents.

use regex::Regex;

use curator_corpus::DocumentLoader;
use curator_store::CorpusStore;
use curator_types::{AnalysisReport, DocumentStats};

use crate::error::AnalysisError;
use crate::topics::TopicDetector;

/// Lines longer than this trip the long-line advisory.
const LONG_LINE_LIMIT: usize = 120;

/// How many long lines a document tolerates before the advisory.
const LONG_LINE_ALLOWANCE: usize = 5;

/// Read-only document inspector.
///
/// Produces a report of structural counters, quality issues with
/// matching suggestions, advisory notes, and detected topics. Never
/// writes anything.
pub struct Analyzer {
    loader: DocumentLoader,
    detector: TopicDetector,
    h1: Regex,
    heading: Regex,
    link: Regex,
}

impl Analyzer {
    pub fn new(store: CorpusStore) -> Result<Self, AnalysisError> {
        Ok(Self {
            loader: DocumentLoader::new(store),
            detector: TopicDetector::new()?,
            h1: Regex::new(r"(?m)^#\s+(.+)$")?,
            heading: Regex::new(r"(?m)^#{1,6}\s")?,
            link: Regex::new(r"\[.*?\]\((.*?)\)")?,
        })
    }

    /// Analyze the document addressed by a slug.
    pub fn analyze(&self, slug: &str) -> Result<AnalysisReport, AnalysisError> {
        let filename = self.loader.resolve(slug)?;
        self.analyze_file(&filename)
    }

    /// Analyze one stored file by name.
    pub fn analyze_file(&self, filename: &str) -> Result<AnalysisReport, AnalysisError> {
        let (raw, meta, body) = self.loader.load_parts(filename)?;

        let stats = DocumentStats {
            lines: raw.split('\n').count(),
            words: body.split_whitespace().count(),
            headings: self.heading.find_iter(&body).count(),
            code_blocks: body.matches("```").count() / 2,
            links: self.link.find_iter(&body).count(),
        };

        let h1_text = self
            .h1
            .captures(&body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());
        let suggested_filename = h1_text.as_deref().and_then(suggested_name);

        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        if meta.get_str("title").is_none() {
            issues.push("Missing title in metadata header".to_string());
            suggestions.push("Add a title to the metadata header for better SEO".to_string());
        }
        if meta.get_items("tags").is_empty() {
            issues.push("No tags defined".to_string());
            suggestions.push("Add tags to improve searchability".to_string());
        }
        if meta.get_str("description").is_none() && meta.get_str("excerpt").is_none() {
            issues.push("No description or excerpt".to_string());
            suggestions.push("Add a description for search results".to_string());
        }
        if stats.headings > 0 && h1_text.is_none() {
            issues.push("No H1 heading found".to_string());
            suggestions.push("Add a main H1 heading at the top".to_string());
        }
        let untagged_fences = body.matches("```\n").count();
        if untagged_fences > 0 {
            issues.push(format!(
                "{untagged_fences} code blocks without language specified"
            ));
            suggestions
                .push("Add language identifiers to code blocks (e.g., ```javascript)".to_string());
        }

        if self
            .link
            .captures_iter(&body)
            .filter_map(|caps| caps.get(1))
            .any(|target| !target.as_str().starts_with("http"))
        {
            suggestions
                .push("Review internal links to ensure they point to correct files".to_string());
        }

        let long_lines = raw
            .split('\n')
            .filter(|line| line.chars().count() > LONG_LINE_LIMIT && !line.starts_with("```"))
            .count();
        if long_lines > LONG_LINE_ALLOWANCE {
            suggestions.push("Consider breaking long lines for better readability".to_string());
        }

        let detected_topics = self.detector.detect(&body);
        if !detected_topics.is_empty() {
            suggestions.push(format!(
                "Detected topics: {}. Consider adding these as tags.",
                detected_topics.join(", ")
            ));
        }

        Ok(AnalysisReport {
            filename: filename.to_string(),
            suggested_filename,
            metadata: meta,
            issues,
            suggestions,
            stats,
            detected_topics,
        })
    }
}

/// Turn top-level heading text into a filename suggestion: keep word
/// characters and hyphens, hyphenate whitespace runs, lower-case.
/// Headings with nothing usable yield no suggestion.
fn suggested_name(title: &str) -> Option<String> {
    let cleaned: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    let hyphenated = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if hyphenated.is_empty() {
        None
    } else {
        Some(format!("{hyphenated}.md"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn analyzer() -> (TempDir, CorpusStore, Analyzer) {
        let dir = TempDir::new().unwrap();
        let store = CorpusStore::open(dir.path()).unwrap();
        let analyzer = Analyzer::new(store.clone()).unwrap();
        (dir, store, analyzer)
    }

    #[test]
    fn test_stats_count_structure() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write(
                "stats.md",
                b"# One\n\n## Two\n\n### Three\n\nSee [docs](https://example.com) for more.\n\n```rust\nlet x = 1;\n```\n",
            )
            .unwrap();

        let report = analyzer.analyze_file("stats.md").unwrap();
        assert_eq!(report.stats.headings, 3);
        assert_eq!(report.stats.code_blocks, 1);
        assert_eq!(report.stats.links, 1);
        assert_eq!(report.stats.words, 16);
    }

    #[test]
    fn test_lines_count_includes_header() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write("counted.md", b"---\ntitle: T\n---\n\nBody.\n")
            .unwrap();

        let report = analyzer.analyze_file("counted.md").unwrap();
        assert_eq!(report.stats.lines, 6);
    }

    #[test]
    fn test_missing_title_reports_issue() {
        let (_dir, store, analyzer) = analyzer();
        store.write("untitled.md", b"Just some text.\n").unwrap();

        let report = analyzer.analyze_file("untitled.md").unwrap();
        assert!(report.issues.iter().any(|i| i.contains("title")));
        assert!(report.suggestions.iter().any(|s| s.contains("title")));
        assert!(report.suggested_filename.is_none());
    }

    #[test]
    fn test_headings_without_h1_report_issue() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write("sections.md", b"## Only\n\n### Nested\n\nText.\n")
            .unwrap();

        let report = analyzer.analyze_file("sections.md").unwrap();
        assert!(report.issues.iter().any(|i| i.contains("H1")));
    }

    #[test]
    fn test_suggested_filename_from_heading() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write("misnamed.md", b"# Deploy Guide: Production!\n\nSteps.\n")
            .unwrap();

        let report = analyzer.analyze_file("misnamed.md").unwrap();
        assert_eq!(
            report.suggested_filename.as_deref(),
            Some("deploy-guide-production.md")
        );
    }

    #[test]
    fn test_untagged_fences_counted_in_issue() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write("code.md", b"Before.\n\n```\nplain\n```\nAfter.\n")
            .unwrap();

        let report = analyzer.analyze_file("code.md").unwrap();
        assert!(report
            .issues
            .iter()
            .any(|i| i.contains("code blocks without language")));
    }

    #[test]
    fn test_internal_link_advisory() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write("linked.md", b"See [notes](other-notes.md) here.\n")
            .unwrap();

        let report = analyzer.analyze_file("linked.md").unwrap();
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("internal links")));
    }

    #[test]
    fn test_external_links_skip_advisory() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write("linked.md", b"See [site](https://example.com) here.\n")
            .unwrap();

        let report = analyzer.analyze_file("linked.md").unwrap();
        assert!(!report
            .suggestions
            .iter()
            .any(|s| s.contains("internal links")));
    }

    #[test]
    fn test_long_lines_advisory_needs_more_than_five() {
        let (_dir, store, analyzer) = analyzer();
        let long = "word ".repeat(30);
        let five = format!("{}\n", [long.as_str(); 5].join("\n"));
        let six = format!("{}\n", [long.as_str(); 6].join("\n"));
        store.write("five.md", five.as_bytes()).unwrap();
        store.write("six.md", six.as_bytes()).unwrap();

        let report = analyzer.analyze_file("five.md").unwrap();
        assert!(!report.suggestions.iter().any(|s| s.contains("long lines")));

        let report = analyzer.analyze_file("six.md").unwrap();
        assert!(report.suggestions.iter().any(|s| s.contains("long lines")));
    }

    #[test]
    fn test_detected_topics_attach_with_suggestion() {
        let (_dir, store, analyzer) = analyzer();
        store
            .write(
                "topical.md",
                b"---\ntitle: T\ntags:\n  - notes\ndescription: D\n---\n\nDeploying docker with kubernetes.\n",
            )
            .unwrap();

        let report = analyzer.analyze_file("topical.md").unwrap();
        assert_eq!(
            report.detected_topics,
            vec!["docker".to_string(), "kubernetes".to_string()]
        );
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("docker, kubernetes")));
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_analyze_unknown_slug_is_not_found() {
        let (_dir, _store, analyzer) = analyzer();
        let err = analyzer.analyze("ghost").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Corpus(curator_corpus::CorpusError::NotFound(_))
        ));
    }
}
