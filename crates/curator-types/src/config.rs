//! Configuration loading for curator.
//!
//! Layered precedence: built-in defaults, then the default config file
//! (~/.config/curator/config.toml), then an explicitly named config
//! file, then CURATOR_* environment variables. CLI flags are applied
//! by the caller on top of the loaded settings.

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CuratorError;

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the managed documents
    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: String,

    /// Directory receiving pristine copies of imported files
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_corpus_dir() -> String {
    "./knowledge-base".to_string()
}

fn default_backup_dir() -> String {
    "./uploads".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            backup_dir: default_backup_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/curator/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (CURATOR_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, CuratorError> {
        let config_dir = ProjectDirs::from("", "", "curator")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("corpus_dir", default_corpus_dir())
            .map_err(|e| CuratorError::Config(e.to_string()))?
            .set_default("backup_dir", default_backup_dir())
            .map_err(|e| CuratorError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| CuratorError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Flat keys: CURATOR_CORPUS_DIR, CURATOR_BACKUP_DIR, CURATOR_LOG_LEVEL
        builder = builder.add_source(Environment::with_prefix("CURATOR"));

        let config = builder
            .build()
            .map_err(|e| CuratorError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CuratorError::Config(e.to_string()))
    }

    /// Corpus directory with a leading ~ expanded.
    pub fn corpus_path(&self) -> PathBuf {
        expand_home(&self.corpus_dir)
    }

    /// Backup directory with a leading ~ expanded.
    pub fn backup_path(&self) -> PathBuf {
        expand_home(&self.backup_dir)
    }
}

/// Expand a leading ~/ to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
