//! CLI argument parsing for the corpus curator.

use clap::{Parser, Subcommand};

/// Corpus Curator
///
/// Maintains a directory of markdown documents: metadata-aware
/// listing, structural analysis, canonical-form rewriting, and
/// relevance-ranked search.
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/curator/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Corpus directory (overrides configured path)
    #[arg(short = 'd', long, global = true)]
    pub corpus_dir: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Curator commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all documents, newest first
    List,

    /// Show one document
    Show {
        /// Document identifier (slug)
        slug: String,
    },

    /// Analyze a document and report issues
    Analyze {
        /// Document identifier (slug)
        slug: String,
    },

    /// Rewrite a document into canonical form
    Process {
        /// Document identifier (slug)
        slug: String,

        /// Write under a new filename and delete the original
        #[arg(short, long)]
        rename: Option<String>,
    },

    /// Search documents by relevance
    Search {
        /// Free-text query
        query: String,
    },

    /// Copy an external markdown file into the corpus
    Import {
        /// Path to the file to import
        path: String,
    },

    /// List every tag in use, sorted
    Tags,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_list() {
        let cli = Cli::parse_from(["curator", "list"]);
        assert!(matches!(cli.command, Commands::List));
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_show_with_slug() {
        let cli = Cli::parse_from(["curator", "show", "deploy-guide"]);
        match cli.command {
            Commands::Show { slug } => assert_eq!(slug, "deploy-guide"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_analyze() {
        let cli = Cli::parse_from(["curator", "analyze", "deploy-guide"]);
        assert!(matches!(cli.command, Commands::Analyze { .. }));
    }

    #[test]
    fn test_cli_process_with_rename() {
        let cli = Cli::parse_from(["curator", "process", "old-name", "--rename", "new-name.md"]);
        match cli.command {
            Commands::Process { slug, rename } => {
                assert_eq!(slug, "old-name");
                assert_eq!(rename, Some("new-name.md".to_string()));
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_cli_process_without_rename() {
        let cli = Cli::parse_from(["curator", "process", "notes"]);
        match cli.command {
            Commands::Process { rename, .. } => assert_eq!(rename, None),
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_cli_search_query() {
        let cli = Cli::parse_from(["curator", "search", "react hooks"]);
        match cli.command {
            Commands::Search { query } => assert_eq!(query, "react hooks"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_import_path() {
        let cli = Cli::parse_from(["curator", "import", "/tmp/notes.md"]);
        match cli.command {
            Commands::Import { path } => assert_eq!(path, "/tmp/notes.md"),
            _ => panic!("Expected Import command"),
        }
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["curator", "--config", "/path/to/config.toml", "list"]);
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_cli_with_corpus_dir() {
        let cli = Cli::parse_from(["curator", "-d", "/srv/docs", "tags"]);
        assert_eq!(cli.corpus_dir, Some("/srv/docs".to_string()));
        assert!(matches!(cli.command, Commands::Tags));
    }

    #[test]
    fn test_cli_with_log_level() {
        let cli = Cli::parse_from(["curator", "--log-level", "debug", "list"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::parse_from(["curator", "list", "--json"]);
        assert!(cli.json);
    }
}
