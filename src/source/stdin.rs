//! Stdin-based log source for piped input.

use crate::model::error::InputError;
use crate::source::LoadedLog;
use std::io::{IsTerminal, Read};

/// Display name for logs read from stdin.
pub const STDIN_NAME: &str = "stdin";

/// Read all of piped stdin.
///
/// # Errors
///
/// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
/// This prevents blocking on user input when the user forgot to pipe data.
pub fn read_stdin() -> Result<LoadedLog, InputError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::NoInput);
    }
    read_from(stdin.lock())
}

/// Read a whole log from any reader.
///
/// # Errors
///
/// Returns `InputError::Io` for read failures and invalid UTF-8.
pub fn read_from<R: Read>(mut reader: R) -> Result<LoadedLog, InputError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(LoadedLog::new(STDIN_NAME, None, content))
}
