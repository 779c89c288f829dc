//! Log entry types representing parsed debug-log lines.
//!
//! LogEntry is the core parsed line from an Apex debug log.
//! Entries are built once by the tokenizer and never mutated afterwards.

use serde::Serialize;

// ===== EntryDetails =====

/// Derived fields that only exist for specific event identifiers.
///
/// Keeping these in a sum type makes "is this a USER_DEBUG-shaped entry"
/// a match instead of a pile of nullable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDetails {
    /// `USER_DEBUG|[line]|LEVEL|message...`
    UserDebug {
        /// Source line referenced by the `[n]` field, if present.
        line_number: Option<u32>,
        /// Log level field, verbatim (e.g. `DEBUG`).
        log_level: String,
        /// Message fields rejoined with `|`.
        message: String,
    },
    /// `STATEMENT_EXECUTE|[line]`
    Statement {
        /// Source line referenced by the `[n]` field, if present.
        line_number: Option<u32>,
    },
}

// ===== LogEntry =====

/// A parsed event line from a debug log.
/// Invariant: `event_identifier` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: String,
    nanoseconds: u64,
    event_identifier: String,
    additional_info: Vec<String>,
    raw_line: String,
    source_line: usize,
    details: Option<EntryDetails>,
}

impl LogEntry {
    /// Create a new log entry.
    ///
    /// Intended for use by the tokenizer; see `parser::tokenize_line`.
    pub fn new(
        timestamp: impl Into<String>,
        nanoseconds: u64,
        event_identifier: impl Into<String>,
        additional_info: Vec<String>,
        raw_line: impl Into<String>,
        source_line: usize,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            nanoseconds,
            event_identifier: event_identifier.into(),
            additional_info,
            raw_line: raw_line.into(),
            source_line,
            details: None,
        }
    }

    /// Attach derived details.
    pub fn with_details(mut self, details: EntryDetails) -> Self {
        self.details = Some(details);
        self
    }

    // ===== Accessors (read-only) =====

    /// `HH:MM:SS.mmm` prefix of the line.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Counter from the parenthesized prefix.
    pub fn nanoseconds(&self) -> u64 {
        self.nanoseconds
    }

    /// Event name, e.g. `USER_DEBUG`.
    pub fn event_identifier(&self) -> &str {
        &self.event_identifier
    }

    /// Fields after the identifier, in order; empty fields kept.
    pub fn additional_info(&self) -> &[String] {
        &self.additional_info
    }

    /// The line exactly as read, without its newline.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// 1-based line number of the raw line within the input text.
    pub fn source_line(&self) -> usize {
        self.source_line
    }

    /// Identifier-specific derived fields, if any.
    pub fn details(&self) -> Option<&EntryDetails> {
        self.details.as_ref()
    }

    /// Source line referenced by the event (USER_DEBUG / STATEMENT_EXECUTE only).
    pub fn line_number(&self) -> Option<u32> {
        match self.details.as_ref()? {
            EntryDetails::UserDebug { line_number, .. } => *line_number,
            EntryDetails::Statement { line_number } => *line_number,
        }
    }

    /// Log level of a USER_DEBUG entry.
    pub fn log_level(&self) -> Option<&str> {
        match self.details.as_ref()? {
            EntryDetails::UserDebug { log_level, .. } => Some(log_level),
            EntryDetails::Statement { .. } => None,
        }
    }

    /// Message of a USER_DEBUG entry.
    pub fn message(&self) -> Option<&str> {
        match self.details.as_ref()? {
            EntryDetails::UserDebug { message, .. } => Some(message),
            EntryDetails::Statement { .. } => None,
        }
    }
}

/// Flat wire shape for a log entry, matching what the browser surface consumes.
impl Serialize for LogEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("LogEntry", 9)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("nanoseconds", &self.nanoseconds)?;
        state.serialize_field("eventIdentifier", &self.event_identifier)?;
        state.serialize_field("additionalInfo", &self.additional_info)?;
        state.serialize_field("lineNumber", &self.line_number())?;
        state.serialize_field("logLevel", &self.log_level())?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("rawLine", &self.raw_line)?;
        state.serialize_field("sourceLine", &self.source_line)?;
        state.end()
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(identifier: &str) -> LogEntry {
        LogEntry::new(
            "10:00:00.001",
            42,
            identifier,
            vec!["[7]".to_string(), "DEBUG".to_string(), "hello".to_string()],
            "10:00:00.001 (42)|USER_DEBUG|[7]|DEBUG|hello",
            3,
        )
    }

    #[test]
    fn new_entry_has_no_details() {
        let entry = make_entry("USER_DEBUG");
        assert!(entry.details().is_none());
        assert_eq!(entry.line_number(), None);
        assert_eq!(entry.log_level(), None);
        assert_eq!(entry.message(), None);
    }

    #[test]
    fn accessors_return_constructor_values() {
        let entry = make_entry("USER_DEBUG");
        assert_eq!(entry.timestamp(), "10:00:00.001");
        assert_eq!(entry.nanoseconds(), 42);
        assert_eq!(entry.event_identifier(), "USER_DEBUG");
        assert_eq!(entry.additional_info().len(), 3);
        assert_eq!(entry.source_line(), 3);
        assert!(entry.raw_line().starts_with("10:00:00.001 (42)"));
    }

    #[test]
    fn user_debug_details_expose_all_fields() {
        let entry = make_entry("USER_DEBUG").with_details(EntryDetails::UserDebug {
            line_number: Some(7),
            log_level: "DEBUG".to_string(),
            message: "hello".to_string(),
        });
        assert_eq!(entry.line_number(), Some(7));
        assert_eq!(entry.log_level(), Some("DEBUG"));
        assert_eq!(entry.message(), Some("hello"));
    }

    #[test]
    fn statement_details_only_expose_line_number() {
        let entry = make_entry("STATEMENT_EXECUTE")
            .with_details(EntryDetails::Statement { line_number: Some(12) });
        assert_eq!(entry.line_number(), Some(12));
        assert_eq!(entry.log_level(), None);
        assert_eq!(entry.message(), None);
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let entry = make_entry("USER_DEBUG").with_details(EntryDetails::UserDebug {
            line_number: None,
            log_level: "INFO".to_string(),
            message: "m".to_string(),
        });
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["eventIdentifier"], "USER_DEBUG");
        assert_eq!(json["logLevel"], "INFO");
        assert_eq!(json["message"], "m");
        assert!(json["lineNumber"].is_null());
        assert_eq!(json["sourceLine"], 3);
    }
}
