//! Domain model types (pure).
//!
//! All types in this module are plain data; the parser builds them and
//! nothing mutates them afterwards.

pub mod category;
pub mod error;
pub mod key_action;
pub mod log_entry;
pub mod parsed_log;

// Re-export for convenience
pub use category::{CategoryKind, GroupedLogEntry, LogCategory, UnknownCategory};
pub use error::{AppError, InputError, NavigationError};
pub use key_action::KeyAction;
pub use log_entry::{EntryDetails, LogEntry};
pub use parsed_log::ParsedLog;
