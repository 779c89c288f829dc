//! File-based log source.

use crate::model::error::InputError;
use crate::source::LoadedLog;
use std::path::Path;
use tracing::debug;

/// Read a whole log file.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors, including invalid UTF-8.
pub fn read_file(path: impl AsRef<Path>) -> Result<LoadedLog, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    debug!(path = ?path, bytes = content.len(), "Read log file");

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LoadedLog::new(name, Some(path.to_path_buf()), content))
}
