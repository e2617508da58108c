//! Directory-backed document storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::StoreError;

/// Size and modification time for one stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: DateTime<Utc>,
}

/// A flat directory of document files.
///
/// All filenames are relative to the root directory. The store holds
/// no state beyond the root path, so cloning is cheap and instances
/// can be handed to each collaborator that needs one.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    root: PathBuf,
}

impl CorpusStore {
    /// Open a store rooted at the given directory, creating it if it
    /// does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Open {
            path: root.display().to_string(),
            source,
        })?;
        debug!(root = %root.display(), "opened corpus store");
        Ok(Self { root })
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List filenames with the given extension (without the dot),
    /// sorted by name so listing order is stable across platforms.
    pub fn list(&self, extension: &str) -> Result<Vec<String>, StoreError> {
        let suffix = format!(".{extension}");
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| StoreError::List {
                path: self.root.display().to_string(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed")),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(&suffix) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read a file's full contents.
    pub fn read(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        fs::read(self.path(filename)).map_err(|source| StoreError::Read {
            filename: filename.to_string(),
            source,
        })
    }

    /// Write a file, replacing any existing contents.
    pub fn write(&self, filename: &str, bytes: &[u8]) -> Result<(), StoreError> {
        fs::write(self.path(filename), bytes).map_err(|source| StoreError::Write {
            filename: filename.to_string(),
            source,
        })
    }

    /// Delete a file.
    pub fn delete(&self, filename: &str) -> Result<(), StoreError> {
        fs::remove_file(self.path(filename)).map_err(|source| StoreError::Delete {
            filename: filename.to_string(),
            source,
        })
    }

    /// Size and modification time of a file.
    pub fn stat(&self, filename: &str) -> Result<FileInfo, StoreError> {
        let meta = fs::metadata(self.path(filename)).map_err(|source| StoreError::Stat {
            filename: filename.to_string(),
            source,
        })?;
        let modified = meta.modified().map_err(|source| StoreError::Stat {
            filename: filename.to_string(),
            source,
        })?;
        Ok(FileInfo {
            size: meta.len(),
            modified: DateTime::<Utc>::from(modified),
        })
    }

    /// True when a file with this name exists in the store.
    pub fn exists(&self, filename: &str) -> bool {
        self.path(filename).is_file()
    }

    fn path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}
