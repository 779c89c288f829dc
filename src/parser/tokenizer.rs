//! Line tokenizer for pipe-delimited debug-log lines.
//!
//! `HH:MM:SS.mmm (NANOS)|EVENT|field|field|...`

use crate::model::{EntryDetails, LogEntry};
use regex::Regex;
use std::sync::LazyLock;

/// Field delimiter.
pub const DELIMITER: char = '|';

/// Marker that identifies the debug-level header line.
const HEADER_MARKER: &str = "APEX_CODE,";

const USER_DEBUG: &str = "USER_DEBUG";
const STATEMENT_EXECUTE: &str = "STATEMENT_EXECUTE";

// Digit classes are `[0-9]`: `\d` would also accept non-ASCII digits.
static TIMESTAMP_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3})\s*\(([0-9]+)\)$")
        .expect("timestamp regex is valid")
});

static HEADER_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+\.[0-9]+)\s").expect("header regex is valid"));

static BRACKETED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9]+)\]").expect("line number regex is valid"));

/// Metadata carried by the debug-level header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugHeader {
    /// Leading `major.minor` token, e.g. `64.0`.
    pub api_version: Option<String>,
    /// Everything after the version, verbatim.
    pub debug_levels: Option<String>,
}

/// Recognize the debug-level header.
///
/// Returns `None` when the line is not a header. A header without a
/// leading version token is still a header (it is consumed, not counted),
/// it just carries no metadata.
pub fn parse_header(line: &str) -> Option<DebugHeader> {
    if !(line.contains(HEADER_MARKER) && line.contains(';')) {
        return None;
    }

    let header = match HEADER_VERSION.captures(line) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            DebugHeader {
                api_version: caps.get(1).map(|m| m.as_str().to_string()),
                debug_levels: Some(line[whole..].to_string()),
            }
        }
        None => DebugHeader::default(),
    };
    Some(header)
}

/// Tokenize one line into a LogEntry.
///
/// Returns `None` for anything that is not an event line: fewer than two
/// segments, a timestamp prefix that does not match, a nanosecond counter
/// that overflows, or an empty identifier.
///
/// # Arguments
///
/// * `line` - The raw line, without its newline
/// * `source_line` - 1-based line number within the input (for navigation)
pub fn tokenize_line(line: &str, source_line: usize) -> Option<LogEntry> {
    let mut segments = line.split(DELIMITER);

    let prefix = segments.next()?;
    let identifier = segments.next()?.trim();
    if identifier.is_empty() {
        return None;
    }

    let caps = TIMESTAMP_PREFIX.captures(prefix.trim())?;
    let timestamp = caps.get(1)?.as_str();
    let nanoseconds: u64 = caps.get(2)?.as_str().parse().ok()?;

    let additional_info: Vec<String> = segments.map(|s| s.trim().to_string()).collect();
    let details = derive_details(identifier, &additional_info);

    let entry = LogEntry::new(
        timestamp,
        nanoseconds,
        identifier,
        additional_info,
        line,
        source_line,
    );
    Some(match details {
        Some(details) => entry.with_details(details),
        None => entry,
    })
}

fn derive_details(identifier: &str, fields: &[String]) -> Option<EntryDetails> {
    match identifier {
        USER_DEBUG if fields.len() >= 3 => Some(EntryDetails::UserDebug {
            line_number: extract_line_number(&fields[0]),
            log_level: fields[1].clone(),
            message: fields[2..].join("|"),
        }),
        STATEMENT_EXECUTE if !fields.is_empty() => Some(EntryDetails::Statement {
            line_number: extract_line_number(&fields[0]),
        }),
        _ => None,
    }
}

/// `[123]` anywhere in the field → 123.
pub fn extract_line_number(field: &str) -> Option<u32> {
    BRACKETED_NUMBER
        .captures(field)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
