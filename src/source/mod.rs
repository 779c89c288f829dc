//! Log input sources.
//!
//! This module provides the impure edge that turns a file or piped stdin
//! into text for the parser:
//! - File loading for a path given on the command line
//! - Stdin for piped input (`apexlog < debug.log`)
//! - Conversion to and from the stored "current log" record

use crate::model::error::InputError;
use crate::report::LogMeta;
use crate::store::StoredLog;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub mod file;
pub mod stdin;

pub use file::read_file;
pub use stdin::{read_from, read_stdin, STDIN_NAME};

static LINE_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3})")
        .expect("line timestamp regex is valid")
});

static ANY_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}").expect("timestamp regex is valid")
});

/// A log's text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLog {
    name: String,
    path: Option<PathBuf>,
    content: String,
    viewed: String,
}

impl LoadedLog {
    /// A freshly read log, viewed today.
    pub fn new(name: impl Into<String>, path: Option<PathBuf>, content: String) -> Self {
        Self {
            name: name.into(),
            path,
            content,
            viewed: today(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source path, `None` for stdin.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Full text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Date the log was first analyzed.
    pub fn viewed(&self) -> &str {
        &self.viewed
    }

    /// First timestamp of the log, if any line starts with one.
    pub fn log_datetime(&self) -> Option<String> {
        extract_first_timestamp(&self.content)
    }

    /// Report metadata for this log.
    pub fn meta(&self) -> LogMeta {
        LogMeta {
            file_name: self.name.clone(),
            file_path: self.path.clone(),
            log_datetime: self.log_datetime(),
            viewed: Some(self.viewed.clone()),
        }
    }

    /// The store record for this log.
    pub fn to_stored(&self) -> StoredLog {
        StoredLog {
            name: self.name.clone(),
            content: self.content.clone(),
            path: self.path.clone(),
            log_datetime: self.log_datetime(),
            viewed: Some(self.viewed.clone()),
        }
    }
}

impl From<StoredLog> for LoadedLog {
    /// Restore a stored log, keeping the date it was first viewed.
    fn from(stored: StoredLog) -> Self {
        Self {
            name: stored.name,
            path: stored.path,
            content: stored.content,
            viewed: stored.viewed.unwrap_or_else(today),
        }
    }
}

/// Read the log named on the command line, or piped stdin when there is none.
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a TTY.
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for I/O errors.
pub fn load(file: Option<&Path>) -> Result<LoadedLog, InputError> {
    match file {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}

/// First `HH:MM:SS.mmm` found at the start of a line.
pub fn extract_first_timestamp(content: &str) -> Option<String> {
    LINE_TIMESTAMP
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Cheap plausibility check: a debug log has `|` delimiters and timestamps.
///
/// Failing it is not an error; callers warn and parse anyway.
pub fn looks_like_debug_log(content: &str) -> bool {
    content.contains('|') && ANY_TIMESTAMP.is_match(content)
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
