//! End-to-end test infrastructure for curator.
//!
//! Provides a shared TestHarness and helper functions for E2E tests
//! covering the full analyze-process-search pipeline.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use curator_analysis::Processor;
use curator_store::CorpusStore;
use curator_types::FixedClock;

/// Shared test harness for E2E tests.
///
/// Provides a corpus store rooted in a temp directory and helper
/// functions for seeding documents.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Corpus store rooted in the temp directory
    pub store: CorpusStore,
}

impl TestHarness {
    /// Create a new test harness with a temp corpus directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let store = CorpusStore::open(temp_dir.path()).expect("Failed to open test corpus");

        Self {
            _temp_dir: temp_dir,
            store,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw file contents into the corpus.
pub fn seed_raw(store: &CorpusStore, filename: &str, content: &str) {
    store
        .write(filename, content.as_bytes())
        .expect("Failed to seed document");
}

/// Write a document with a standard metadata header into the corpus.
pub fn seed_document(
    store: &CorpusStore,
    filename: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    date: &str,
    body: &str,
) {
    let mut content = format!("---\ntitle: {title}\ndescription: {description}\ndate: {date}\n");
    if !tags.is_empty() {
        content.push_str("tags:\n");
        for tag in tags {
            content.push_str(&format!("  - {tag}\n"));
        }
    }
    content.push_str("---\n\n");
    content.push_str(body);
    seed_raw(store, filename, &content);
}

/// Build a processor pinned to 2024-03-09 so synthesized dates are
/// deterministic.
pub fn fixed_processor(store: &CorpusStore) -> Processor {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap());
    Processor::with_clock(store.clone(), Arc::new(clock)).expect("Failed to build processor")
}
