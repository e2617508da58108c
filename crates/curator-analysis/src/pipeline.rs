//! Analyze, synthesize, normalize, write.
//!
//! The processor is the one mutating operation in the system. Every
//! step fails fast; on rename the original file is deleted only after
//! the write to the new name has succeeded. Concurrent processing of
//! the same document has no locking discipline: last writer wins.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use curator_corpus::filename::DOC_EXTENSION;
use curator_corpus::{DocumentLoader, MatterCodec};
use curator_store::CorpusStore;
use curator_types::{AnalysisReport, Clock, Metadata, SystemClock};

use crate::analyzer::Analyzer;
use crate::error::AnalysisError;
use crate::normalize::Normalizer;
use crate::synthesize::MetadataSynthesizer;

/// What a process run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// Final filename, after any rename
    pub filename: String,
    /// Report the rewrite was based on
    pub report: AnalysisReport,
    /// Synthesized header as written
    pub metadata: Metadata,
}

/// Orchestrates the full document rewrite pipeline.
pub struct Processor {
    store: CorpusStore,
    loader: DocumentLoader,
    analyzer: Analyzer,
    synthesizer: MetadataSynthesizer,
    normalizer: Normalizer,
    codec: MatterCodec,
}

impl Processor {
    pub fn new(store: CorpusStore) -> Result<Self, AnalysisError> {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: CorpusStore, clock: Arc<dyn Clock>) -> Result<Self, AnalysisError> {
        Ok(Self {
            loader: DocumentLoader::new(store.clone()),
            analyzer: Analyzer::new(store.clone())?,
            synthesizer: MetadataSynthesizer::with_clock(clock)?,
            normalizer: Normalizer::new()?,
            codec: MatterCodec::new(),
            store,
        })
    }

    /// Rewrite the document addressed by a slug into canonical form,
    /// optionally under a new filename.
    pub fn process(
        &self,
        slug: &str,
        rename: Option<&str>,
    ) -> Result<ProcessOutcome, AnalysisError> {
        if let Some(name) = rename {
            validate_target_name(name)?;
        }

        let source = self.loader.resolve(slug)?;
        let report = self.analyzer.analyze_file(&source)?;
        let (_, existing, body) = self.loader.load_parts(&source)?;

        let metadata =
            self.synthesizer
                .synthesize(&source, &existing, &body, &report.detected_topics);
        let normalized = self.normalizer.normalize(&body);
        let rendered = self.codec.compose(&metadata, &normalized);

        let target = rename.unwrap_or(&source);
        self.store.write(target, rendered.as_bytes())?;
        if target != source {
            self.store.delete(&source)?;
            info!(from = %source, to = %target, "renamed document");
        }
        info!(filename = %target, "processed document");

        Ok(ProcessOutcome {
            filename: target.to_string(),
            report,
            metadata,
        })
    }
}

/// Reject rename targets before any file access: must be a bare
/// `.md` filename with a non-empty stem and no path separators.
fn validate_target_name(name: &str) -> Result<(), AnalysisError> {
    let suffix = format!(".{DOC_EXTENSION}");
    if !name.ends_with(&suffix) || name.len() == suffix.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "rename target must be a non-empty {suffix} filename"
        )));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(AnalysisError::InvalidInput(
            "rename target must not contain path separators".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use curator_types::FixedClock;
    use tempfile::TempDir;

    fn processor() -> (TempDir, CorpusStore, Processor) {
        let dir = TempDir::new().unwrap();
        let store = CorpusStore::open(dir.path()).unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap());
        let processor = Processor::with_clock(store.clone(), Arc::new(clock)).unwrap();
        (dir, store, processor)
    }

    fn raw_string(store: &CorpusStore, filename: &str) -> String {
        String::from_utf8(store.read(filename).unwrap()).unwrap()
    }

    #[test]
    fn test_process_rewrites_in_place() {
        let (_dir, store, processor) = processor();
        store
            .write("notes.md", b"#  Messy Title\nSome docker notes.\n\n\n\nEnd.\n")
            .unwrap();

        let outcome = processor.process("notes", None).unwrap();
        assert_eq!(outcome.filename, "notes.md");
        assert!(store.exists("notes.md"));

        let written = raw_string(&store, "notes.md");
        assert!(written.starts_with("---\n"));
        assert!(written.contains("title: Messy Title"));
        assert!(written.contains("# Messy Title\n\nSome docker notes."));
        assert!(written.ends_with("End.\n"));
        assert!(!written.ends_with("\n\n"));
    }

    #[test]
    fn test_process_rename_moves_file() {
        let (_dir, store, processor) = processor();
        store.write("old-name.md", b"Body.\n").unwrap();

        let outcome = processor.process("old-name", Some("new-name.md")).unwrap();
        assert_eq!(outcome.filename, "new-name.md");
        assert!(store.exists("new-name.md"));
        assert!(!store.exists("old-name.md"));
    }

    #[test]
    fn test_process_rename_to_same_name_keeps_file() {
        let (_dir, store, processor) = processor();
        store.write("same.md", b"Body.\n").unwrap();

        let outcome = processor.process("same", Some("same.md")).unwrap();
        assert_eq!(outcome.filename, "same.md");
        assert!(store.exists("same.md"));
    }

    #[test]
    fn test_process_synthesizes_header_fields() {
        let (_dir, store, processor) = processor();
        store
            .write(
                "tagged.md",
                b"---\ntags:\n  - go\n---\n\n# Shipping\n\nWe deploy with docker.\n",
            )
            .unwrap();

        let outcome = processor.process("tagged", None).unwrap();
        assert_eq!(outcome.metadata.get_str("title"), Some("Shipping"));
        assert_eq!(
            outcome.metadata.get_items("tags"),
            vec!["go".to_string(), "docker".to_string()]
        );
        assert_eq!(outcome.metadata.get_str("date"), Some("2024-03-09"));
        assert_eq!(outcome.metadata.get_str("last_updated"), Some("2024-03-09"));
    }

    #[test]
    fn test_process_twice_is_stable() {
        let (_dir, store, processor) = processor();
        store
            .write("stable.md", b"# Title\nIntro text.\n\n\nMore text.\n")
            .unwrap();

        processor.process("stable", None).unwrap();
        let first = raw_string(&store, "stable.md");
        processor.process("stable", None).unwrap();
        let second = raw_string(&store, "stable.md");
        assert_eq!(first, second);
    }

    #[test]
    fn test_rename_without_extension_is_rejected() {
        let (_dir, store, processor) = processor();
        store.write("a.md", b"Body.\n").unwrap();

        let err = processor.process("a", Some("b.txt")).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert!(store.exists("a.md"));
    }

    #[test]
    fn test_rename_with_path_separator_is_rejected() {
        let (_dir, store, processor) = processor();
        store.write("a.md", b"Body.\n").unwrap();

        let err = processor.process("a", Some("../b.md")).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_process_unknown_slug_is_not_found() {
        let (_dir, _store, processor) = processor();
        let err = processor.process("ghost", None).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Corpus(curator_corpus::CorpusError::NotFound(_))
        ));
    }
}
