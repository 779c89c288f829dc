//! Error types for apexlog.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping every failure the CLI can hit
//!   - [`InputError`] - Log file/stdin reading failures (file not found, no input, IO)
//!   - [`NavigationError`] - Bad entry addresses or coordinates outside the report
//!   - [`StoreError`](crate::store::StoreError) - "current log" persistence failures
//!   - [`ConfigError`](crate::config::ConfigError) - Invalid config file
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal failures
//!
//! # What is NOT an error
//!
//! Parsing never fails. Malformed lines are skipped, unknown event identifiers land in
//! the `Other` category and an input without any event lines produces an empty report.
//! Deciding that an empty report means "nothing to show" is the caller's job.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert to `AppError` via `From`, so `main` can
/// use `?` throughout and print one descriptive message before exiting.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// An entry address did not resolve against the parsed log.
    #[error("Navigation failed: {0}")]
    Navigation(#[from] NavigationError),

    /// The "current log" store could not be read or written.
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    /// The configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] crate::view::TuiError),

    /// Writing to stdout failed (e.g. broken pipe, serialization).
    #[error("Output error: {0}")]
    Output(String),
}

/// Errors encountered when reading log input from files or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **NoInput**: Display usage help - user must provide file path or pipe stdin
/// - **Io**: Generic I/O failures (permissions, invalid UTF-8) - display and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified log file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use apexlog::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.log")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.log"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided and stdin is an interactive terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use apexlog::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// `--restore` was requested but nothing has been stored yet.
    #[error("No stored log to restore")]
    NothingStored,

    /// Generic I/O error reading from input source.
    ///
    /// The `#[from]` attribute lets `std::io::Error` propagate with `?`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors resolving an entry address against a parsed log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Address text is not `<category>:<group>:<entry>`.
    #[error("Invalid entry address '{raw}': expected <category>:<group>:<entry>")]
    InvalidAddress {
        /// The address as given.
        raw: String,
    },

    /// Category part of the address is not a known key.
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Coordinates are syntactically fine but point outside the report.
    #[error("No entry {entry} in group {group} of {category}")]
    OutOfRange {
        /// Category display name.
        category: String,
        /// Group index.
        group: usize,
        /// Entry index.
        entry: usize,
    },
}
