//! Presentation-neutral views of a ParsedLog.
//!
//! The report is what a presentation surface receives: a serializable
//! summary of the non-empty categories, a short text summary, and entry
//! addresses that resolve back to raw lines.

use crate::model::{CategoryKind, GroupedLogEntry, LogCategory, LogEntry, NavigationError, ParsedLog};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ===== LogMeta =====

/// Where a log came from and when it was looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogMeta {
    /// Display name (file name, or `stdin`).
    pub file_name: String,
    /// Path on disk, when the log came from a file.
    pub file_path: Option<PathBuf>,
    /// First `HH:MM:SS.mmm` timestamp found in the log.
    pub log_datetime: Option<String>,
    /// Local date the log was analyzed, `YYYY-MM-DD`.
    pub viewed: Option<String>,
}

// ===== LogReport =====

/// Serializable report over a parsed log.
///
/// Only non-empty categories are included, keyed by machine key
/// (`code_execution`, ...) and in display order.
#[derive(Debug, Serialize)]
pub struct LogReport<'a> {
    #[serde(flatten)]
    meta: &'a LogMeta,
    total_entries: usize,
    execution_time_ms: f64,
    api_version: Option<&'a str>,
    debug_levels: Option<&'a str>,
    categories: CategoryMap<'a>,
}

impl<'a> LogReport<'a> {
    /// Borrow a report view of `parsed`.
    pub fn from_parsed(parsed: &'a ParsedLog, meta: &'a LogMeta) -> Self {
        Self {
            meta,
            total_entries: parsed.total_entries(),
            execution_time_ms: parsed.execution_time_ms(),
            api_version: parsed.api_version(),
            debug_levels: parsed.debug_levels(),
            categories: CategoryMap(
                parsed
                    .non_empty_categories()
                    .map(CategoryReport::from)
                    .collect(),
            ),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug)]
struct CategoryMap<'a>(Vec<CategoryReport<'a>>);

impl Serialize for CategoryMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(category.kind.key(), category)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
struct CategoryReport<'a> {
    #[serde(skip)]
    kind: CategoryKind,
    name: &'static str,
    description: &'static str,
    event_types: &'a [String],
    total_entries: usize,
    groups: &'a [GroupedLogEntry],
}

impl<'a> From<&'a LogCategory> for CategoryReport<'a> {
    fn from(category: &'a LogCategory) -> Self {
        Self {
            kind: category.kind(),
            name: category.name(),
            description: category.description(),
            event_types: category.event_types(),
            total_entries: category.total_entries(),
            groups: category.groups(),
        }
    }
}

// ===== Text summary =====

/// Short plain-text overview: totals, then one line per non-empty category.
pub fn summary(parsed: &ParsedLog) -> String {
    let mut lines = vec![
        format!("Total Log Entries: {}", parsed.total_entries()),
        format!("Execution Time: {:.2}ms", parsed.execution_time_ms()),
    ];
    if let Some(version) = parsed.api_version() {
        lines.push(format!("API Version: {version}"));
    }

    lines.push(String::new());
    lines.push("Categories:".to_string());
    lines.extend(
        parsed
            .non_empty_categories()
            .map(|c| format!("  {}: {} entries", c.name(), c.total_entries())),
    );
    lines.join("\n")
}

/// One-line status shown after an analysis finishes.
pub fn completion_message(parsed: &ParsedLog) -> String {
    format!(
        "Log analysis complete! Found {} entries across {} categories.",
        parsed.total_entries(),
        parsed.non_empty_categories().count()
    )
}

// ===== EntryAddress =====

/// Index coordinates of one entry: `<category>:<group>:<entry>`.
///
/// Indices are 0-based and refer to the sorted order of the report, so an
/// address is only meaningful against the log it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryAddress {
    /// Category the entry belongs to.
    pub category: CategoryKind,
    /// Index into the category's groups.
    pub group: usize,
    /// Index into the group's entries.
    pub entry: usize,
}

impl EntryAddress {
    /// Look the entry up in `parsed`.
    pub fn resolve<'a>(&self, parsed: &'a ParsedLog) -> Result<&'a LogEntry, NavigationError> {
        parsed
            .entry_at(self.category, self.group, self.entry)
            .ok_or_else(|| NavigationError::OutOfRange {
                category: self.category.name().to_string(),
                group: self.group,
                entry: self.entry,
            })
    }
}

impl FromStr for EntryAddress {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NavigationError::InvalidAddress { raw: s.to_string() };

        let parts: Vec<&str> = s.split(':').collect();
        let [category, group, entry] = parts[..] else {
            return Err(invalid());
        };

        let category: CategoryKind = category
            .trim()
            .parse()
            .map_err(|_| NavigationError::UnknownCategory(category.to_string()))?;
        let group = group.trim().parse().map_err(|_| invalid())?;
        let entry = entry.trim().parse().map_err(|_| invalid())?;

        Ok(Self {
            category,
            group,
            entry,
        })
    }
}

impl fmt::Display for EntryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.category.key(), self.group, self.entry)
    }
}

/// `path:line` (or `name:line` for stdin) for an entry's raw line.
pub fn source_location(meta: &LogMeta, entry: &LogEntry) -> String {
    match &meta.file_path {
        Some(path) => format!("{}:{}", path.display(), entry.source_line()),
        None => format!("{}:{}", meta.file_name, entry.source_line()),
    }
}
