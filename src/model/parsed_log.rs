//! Top-level parse result.

use crate::model::{CategoryKind, GroupedLogEntry, LogCategory, LogEntry};
use std::collections::BTreeMap;

/// The categorized report produced by `parser::parse_log`.
///
/// # Invariants
///
/// - All 8 category keys are present, even when empty
/// - `total_entries` equals the sum of category totals
/// - Each category total equals the sum of its group counts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLog {
    categories: BTreeMap<CategoryKind, LogCategory>,
    total_entries: usize,
    execution_time_ms: f64,
    api_version: Option<String>,
    debug_levels: Option<String>,
}

impl ParsedLog {
    /// Assemble a report. Missing categories are filled with empty ones.
    pub fn new(
        categories: impl IntoIterator<Item = LogCategory>,
        execution_time_ms: f64,
        api_version: Option<String>,
        debug_levels: Option<String>,
    ) -> Self {
        let mut map: BTreeMap<CategoryKind, LogCategory> = CategoryKind::ALL
            .into_iter()
            .map(|kind| (kind, LogCategory::empty(kind)))
            .collect();
        for category in categories {
            map.insert(category.kind(), category);
        }
        let total_entries = map.values().map(LogCategory::total_entries).sum();

        Self {
            categories: map,
            total_entries,
            execution_time_ms,
            api_version,
            debug_levels,
        }
    }

    /// The report for an empty input.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0, None, None)
    }

    /// The category for `kind`; every kind is always present.
    pub fn category(&self, kind: CategoryKind) -> &LogCategory {
        // Every kind is inserted by `new`.
        &self.categories[&kind]
    }

    /// All categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = &LogCategory> {
        self.categories.values()
    }

    /// Categories with at least one entry, in display order.
    pub fn non_empty_categories(&self) -> impl Iterator<Item = &LogCategory> {
        self.categories.values().filter(|c| !c.is_empty())
    }

    /// Number of entries across all categories.
    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// Milliseconds between EXECUTION_STARTED and EXECUTION_FINISHED, or 0.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    /// API version from the header line, e.g. `64.0`.
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Debug-level settings from the header line.
    pub fn debug_levels(&self) -> Option<&str> {
        self.debug_levels.as_deref()
    }

    // ===== Navigation =====

    /// Group `group_index` of category `kind`.
    pub fn group_at(&self, kind: CategoryKind, group_index: usize) -> Option<&GroupedLogEntry> {
        self.category(kind).groups().get(group_index)
    }

    /// Look a group up by its label.
    pub fn find_group(&self, kind: CategoryKind, label: &str) -> Option<&GroupedLogEntry> {
        self.category(kind).groups().iter().find(|g| g.label() == label)
    }

    /// Resolve index coordinates to an entry.
    pub fn entry_at(
        &self,
        kind: CategoryKind,
        group_index: usize,
        entry_index: usize,
    ) -> Option<&LogEntry> {
        self.group_at(kind, group_index)?.entries().get(entry_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(identifier: &str, source_line: usize) -> LogEntry {
        LogEntry::new("00:00:00.000", 0, identifier, Vec::new(), identifier, source_line)
    }

    fn sample() -> ParsedLog {
        let code = LogCategory::new(
            CategoryKind::CodeExecution,
            vec!["METHOD_ENTRY".into()],
            vec![GroupedLogEntry::new(
                "METHOD_ENTRY",
                vec![entry("METHOD_ENTRY", 1), entry("METHOD_ENTRY", 4)],
            )],
        );
        ParsedLog::new(vec![code], 1.5, Some("64.0".into()), None)
    }

    #[test]
    fn empty_has_all_categories() {
        let log = ParsedLog::empty();
        assert_eq!(log.categories().count(), 8);
        assert_eq!(log.non_empty_categories().count(), 0);
        assert_eq!(log.total_entries(), 0);
        assert_eq!(log.execution_time_ms(), 0.0);
    }

    #[test]
    fn total_is_sum_of_categories() {
        let log = sample();
        assert_eq!(log.total_entries(), 2);
        assert_eq!(log.category(CategoryKind::CodeExecution).total_entries(), 2);
        assert_eq!(log.api_version(), Some("64.0"));
    }

    #[test]
    fn entry_at_resolves_coordinates() {
        let log = sample();
        let entry = log.entry_at(CategoryKind::CodeExecution, 0, 1).expect("entry");
        assert_eq!(entry.source_line(), 4);
    }

    #[test]
    fn entry_at_out_of_range_is_none() {
        let log = sample();
        assert!(log.entry_at(CategoryKind::CodeExecution, 0, 2).is_none());
        assert!(log.entry_at(CategoryKind::CodeExecution, 1, 0).is_none());
        assert!(log.entry_at(CategoryKind::Other, 0, 0).is_none());
    }

    #[test]
    fn find_group_by_label() {
        let log = sample();
        assert!(log.find_group(CategoryKind::CodeExecution, "METHOD_ENTRY").is_some());
        assert!(log.find_group(CategoryKind::CodeExecution, "METHOD_EXIT").is_none());
    }
}
