//! "Current log" persistence.
//!
//! A key-value collaborator with a single record, `currentLog`, holding the
//! last analyzed log so it can be reopened later. The parser never touches
//! this module; the front end injects a `LogStore` where it needs one.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the single record a store holds.
pub const CURRENT_LOG_KEY: &str = "currentLog";

/// Errors reading or writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("Store I/O error at {path:?}: {source}")]
    Io {
        /// Store file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not valid JSON for a record.
    #[error("Corrupt store file {path:?}: {source}")]
    Json {
        /// Store file path.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// The stored record: enough to re-parse and re-label a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLog {
    /// Display name.
    pub name: String,
    /// Full log text.
    pub content: String,
    /// Path the log was read from, if any.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// First timestamp of the log.
    #[serde(default)]
    pub log_datetime: Option<String>,
    /// Date the log was analyzed.
    #[serde(default)]
    pub viewed: Option<String>,
}

/// get/put/delete on the `currentLog` record.
pub trait LogStore {
    /// Read the record, `None` when nothing is stored.
    fn get(&self) -> Result<Option<StoredLog>, StoreError>;

    /// Replace the record.
    fn put(&self, log: &StoredLog) -> Result<(), StoreError>;

    /// Remove the record. Deleting nothing is not an error.
    fn delete(&self) -> Result<(), StoreError>;
}

// ===== FileStore =====

/// On-disk JSON layout: `{ "currentLog": { ... } }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(rename = "currentLog", default)]
    current_log: Option<StoredLog>,
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by `path`. The file is created on first `put`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_file(&self) -> Result<StoreFile, StoreError> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_file(&self, file: &StoreFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(file).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

impl LogStore for FileStore {
    fn get(&self) -> Result<Option<StoredLog>, StoreError> {
        Ok(self.read_file()?.current_log)
    }

    fn put(&self, log: &StoredLog) -> Result<(), StoreError> {
        debug!(path = ?self.path, name = %log.name, "Storing {}", CURRENT_LOG_KEY);
        self.write_file(&StoreFile {
            current_log: Some(log.clone()),
        })
    }

    fn delete(&self) -> Result<(), StoreError> {
        debug!(path = ?self.path, "Deleting {}", CURRENT_LOG_KEY);
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(self.io_error(e)),
            _ => Ok(()),
        }
    }
}

// ===== MemoryStore =====

/// In-process store for tests; nothing is written to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RefCell<Option<StoredLog>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStore for MemoryStore {
    fn get(&self) -> Result<Option<StoredLog>, StoreError> {
        Ok(self.record.borrow().clone())
    }

    fn put(&self, log: &StoredLog) -> Result<(), StoreError> {
        *self.record.borrow_mut() = Some(log.clone());
        Ok(())
    }

    fn delete(&self) -> Result<(), StoreError> {
        self.record.borrow_mut().take();
        Ok(())
    }
}
