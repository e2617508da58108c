//! Corpus Curator CLI
//!
//! Maintains a directory of markdown documents: metadata-aware
//! listing, structural analysis, canonical-form rewriting, and
//! relevance-ranked search.
//!
//! # Usage
//!
//! ```bash
//! curator list [--json]
//! curator show <slug>
//! curator analyze <slug>
//! curator process <slug> [--rename NEW-NAME.md]
//! curator search "<query>"
//! curator import <path>
//! curator tags
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/curator/config.toml)
//! 3. Environment variables (CURATOR_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use curator_cli::{
    analyze_document, import_file, init_logging, list_documents, list_tags, load_settings,
    process_document, search_documents, show_document, Cli, Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(
        cli.config.as_deref(),
        cli.corpus_dir.as_deref(),
        cli.log_level.as_deref(),
    )?;
    init_logging(&settings)?;

    match cli.command {
        Commands::List => list_documents(&settings, cli.json)?,
        Commands::Show { slug } => show_document(&settings, &slug, cli.json)?,
        Commands::Analyze { slug } => analyze_document(&settings, &slug, cli.json)?,
        Commands::Process { slug, rename } => {
            process_document(&settings, &slug, rename.as_deref(), cli.json)?
        }
        Commands::Search { query } => search_documents(&settings, &query, cli.json)?,
        Commands::Import { path } => import_file(&settings, &path)?,
        Commands::Tags => list_tags(&settings, cli.json)?,
    }

    Ok(())
}
