//! Command implementations for the curator CLI.
//!
//! Handles:
//! - list/show/tags: read-only corpus views
//! - analyze: quality report for one document
//! - process: canonical rewrite, the one mutating operation
//! - search: relevance-ranked lookup
//! - import: copy an external file into the corpus, with backup

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use curator_analysis::{Analyzer, Processor};
use curator_corpus::filename::DOC_EXTENSION;
use curator_corpus::DocumentLoader;
use curator_search::SearchEngine;
use curator_store::CorpusStore;
use curator_types::Settings;

/// Load settings and apply CLI overrides on top.
pub fn load_settings(
    config_path: Option<&str>,
    corpus_dir_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(dir) = corpus_dir_override {
        settings.corpus_dir = dir.to_string();
    }
    if let Some(level) = log_level_override {
        settings.log_level = level.to_string();
    }
    Ok(settings)
}

/// Initialize logging. Diagnostics go to stderr so stdout stays
/// parseable under --json.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn open_store(settings: &Settings) -> Result<CorpusStore> {
    CorpusStore::open(settings.corpus_path()).context("Failed to open corpus directory")
}

/// List every document, newest first.
pub fn list_documents(settings: &Settings, json: bool) -> Result<()> {
    let store = open_store(settings)?;
    let loader = DocumentLoader::new(store.clone());
    let docs = loader.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&docs)?);
        return Ok(());
    }

    if docs.is_empty() {
        println!("No documents in {}", settings.corpus_path().display());
        return Ok(());
    }

    println!(
        "{} documents in {}",
        docs.len(),
        settings.corpus_path().display()
    );
    for doc in &docs {
        let file_info = store.stat(&doc.filename)?;
        println!();
        println!("{}  [{}]", doc.title, doc.slug);
        println!("  file: {} ({} bytes)", doc.filename, file_info.size);
        println!("  modified: {}", file_info.modified.format("%Y-%m-%d %H:%M"));
        println!("  date: {}", doc.date.format("%Y-%m-%d"));
        if !doc.tags.is_empty() {
            println!("  tags: {}", doc.tags.join(", "));
        }
    }
    Ok(())
}

/// Show one document in full.
pub fn show_document(settings: &Settings, slug: &str, json: bool) -> Result<()> {
    let store = open_store(settings)?;
    let loader = DocumentLoader::new(store);
    let doc = loader.get_by_slug(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}  [{}]", doc.title, doc.slug);
    println!("file: {}", doc.filename);
    println!("date: {}", doc.date.format("%Y-%m-%d"));
    if !doc.tags.is_empty() {
        println!("tags: {}", doc.tags.join(", "));
    }
    if !doc.description.is_empty() {
        println!("description: {}", doc.description);
    }
    println!();
    println!("{}", doc.body.trim_end());
    Ok(())
}

/// Analyze a document and print its report.
pub fn analyze_document(settings: &Settings, slug: &str, json: bool) -> Result<()> {
    let store = open_store(settings)?;
    let analyzer = Analyzer::new(store)?;
    let report = analyzer.analyze(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Analysis of {}", report.filename);
    println!(
        "  {} lines, {} words, {} headings, {} code blocks, {} links",
        report.stats.lines,
        report.stats.words,
        report.stats.headings,
        report.stats.code_blocks,
        report.stats.links
    );
    if let Some(name) = &report.suggested_filename {
        println!("  suggested filename: {}", name);
    }
    if !report.detected_topics.is_empty() {
        println!("  detected topics: {}", report.detected_topics.join(", "));
    }

    if report.issues.is_empty() {
        println!("No issues found");
    } else {
        println!("Issues:");
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    }
    if !report.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }
    Ok(())
}

/// Rewrite a document into canonical form, optionally renaming it.
pub fn process_document(
    settings: &Settings,
    slug: &str,
    rename: Option<&str>,
    json: bool,
) -> Result<()> {
    let store = open_store(settings)?;
    let processor = Processor::new(store)?;
    let outcome = processor.process(slug, rename)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Processed {}", outcome.filename);
    if let Some(title) = outcome.metadata.get_str("title") {
        println!("  title: {}", title);
    }
    let tags = outcome.metadata.get_items("tags");
    if !tags.is_empty() {
        println!("  tags: {}", tags.join(", "));
    }
    if !outcome.report.issues.is_empty() {
        println!("  issues noted: {}", outcome.report.issues.len());
    }
    Ok(())
}

/// Search the corpus and print matches, best first.
pub fn search_documents(settings: &Settings, query: &str, json: bool) -> Result<()> {
    let store = open_store(settings)?;
    let engine = SearchEngine::new(store);
    let results = engine.search(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    println!("{} matches for '{}'", results.len(), query);
    for doc in &results {
        println!("  {}  [{}]", doc.title, doc.slug);
        if !doc.excerpt.is_empty() {
            println!("    {}", doc.excerpt);
        }
    }
    Ok(())
}

/// Copy an external markdown file into the corpus.
///
/// The filename is sanitized to a safe character set and a pristine
/// timestamped copy lands in the backup directory before the corpus
/// write.
pub fn import_file(settings: &Settings, path: &str) -> Result<()> {
    let source = Path::new(path);
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .context("Import path has no usable filename")?;

    let suffix = format!(".{DOC_EXTENSION}");
    if !name.ends_with(&suffix) || name.len() == suffix.len() {
        anyhow::bail!("Only {suffix} files can be imported");
    }

    let safe_name: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let bytes = fs::read(source).with_context(|| format!("Failed to read {path}"))?;

    let backups =
        CorpusStore::open(settings.backup_path()).context("Failed to open backup directory")?;
    let stamped = format!("{}_{}", Utc::now().timestamp_millis(), safe_name);
    backups.write(&stamped, &bytes)?;

    let store = open_store(settings)?;
    store.write(&safe_name, &bytes)?;

    info!(filename = %safe_name, backup = %stamped, "imported document");
    println!(
        "Imported {} into {}",
        safe_name,
        settings.corpus_path().display()
    );
    Ok(())
}

/// List every tag in use across the corpus, sorted.
pub fn list_tags(settings: &Settings, json: bool) -> Result<()> {
    let store = open_store(settings)?;
    let loader = DocumentLoader::new(store);
    let docs = loader.list_all()?;

    let tags: BTreeSet<String> = docs.iter().flat_map(|doc| doc.tags.iter().cloned()).collect();
    let tags: Vec<String> = tags.into_iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("No tags in use");
        return Ok(());
    }
    for tag in &tags {
        println!("{}", tag);
    }
    Ok(())
}
