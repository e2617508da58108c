//! Curator CLI library exports.
//!
//! This crate provides the `curator` command-line binary.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{
    analyze_document, import_file, init_logging, list_documents, list_tags, load_settings,
    process_document, search_documents, show_document,
};
