//! Heuristic sub-grouping of same-identifier entries.
//!
//! Each event identifier with a known shape gets its own pure key function;
//! everything else collapses into one group named after the identifier.
//! Group keys are the display labels (e.g. `USER_DEBUG (Errors)`).

use crate::model::{GroupedLogEntry, LogEntry};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static SOQL_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)select.*?from\s+([A-Za-z0-9_]+)").expect("soql object regex is valid")
});

static HEAP_BYTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bytes:([0-9]+)").expect("heap bytes regex is valid"));

// ===== Dispatch =====

/// Which heuristic applies to an event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Message keywords, then log level.
    UserDebug,
    /// Line number ranges.
    StatementExecute,
    /// Code unit kind (trigger, anonymous, batch, ...).
    CodeUnit,
    /// DML operation keyword.
    Dml,
    /// Queried object name, then query shape.
    Soql,
    /// Allocation size bucket.
    HeapAllocate,
    /// Rule name.
    ValidationRule,
    /// Workflow keyword.
    Workflow,
    /// One group named after the identifier.
    Passthrough,
}

impl Heuristic {
    /// Select the heuristic for an identifier.
    pub fn for_identifier(event_identifier: &str) -> Self {
        match event_identifier {
            "USER_DEBUG" => Heuristic::UserDebug,
            "STATEMENT_EXECUTE" => Heuristic::StatementExecute,
            "CODE_UNIT_STARTED" | "CODE_UNIT_FINISHED" => Heuristic::CodeUnit,
            "DML_BEGIN" | "DML_END" => Heuristic::Dml,
            "SOQL_EXECUTE_BEGIN" | "SOQL_EXECUTE_END" => Heuristic::Soql,
            "HEAP_ALLOCATE" => Heuristic::HeapAllocate,
            "VALIDATION_RULE" => Heuristic::ValidationRule,
            "WORKFLOW" => Heuristic::Workflow,
            _ => Heuristic::Passthrough,
        }
    }

    /// Compute the group label for one entry.
    pub fn group_key(self, entry: &LogEntry) -> String {
        match self {
            Heuristic::UserDebug => user_debug_key(entry),
            Heuristic::StatementExecute => statement_key(entry),
            Heuristic::CodeUnit => code_unit_key(entry),
            Heuristic::Dml => dml_key(entry),
            Heuristic::Soql => soql_key(entry),
            Heuristic::HeapAllocate => heap_key(entry),
            Heuristic::ValidationRule => validation_rule_key(entry),
            Heuristic::Workflow => workflow_key(entry),
            Heuristic::Passthrough => entry.event_identifier().to_string(),
        }
    }
}

/// Partition entries that share `event_identifier` into labeled sub-groups.
///
/// Groups are sorted by size, descending. Equal sizes keep the order in
/// which their key was first seen; entries keep file order inside a group.
pub fn group_entries(event_identifier: &str, entries: Vec<LogEntry>) -> Vec<GroupedLogEntry> {
    let heuristic = Heuristic::for_identifier(event_identifier);

    let mut buckets = OrderedBuckets::default();
    for entry in entries {
        let key = heuristic.group_key(&entry);
        buckets.push(key, entry);
    }

    let mut groups: Vec<GroupedLogEntry> = buckets
        .into_iter()
        .map(|(label, entries)| GroupedLogEntry::new(label, entries))
        .collect();
    groups.sort_by(|a, b| b.count().cmp(&a.count()));
    groups
}

// ===== Key functions =====

fn user_debug_key(entry: &LogEntry) -> String {
    let Some(message) = entry.message().filter(|m| !m.is_empty()) else {
        return "USER_DEBUG (No Message)".to_string();
    };
    let message = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| message.contains(w));

    let bucket = if has(&["error", "exception"]) {
        "Errors"
    } else if has(&["start", "begin"]) {
        "Start/Begin"
    } else if has(&["end", "finish", "complete"]) {
        "End/Finish"
    } else if has(&["query", "soql"]) {
        "Query Related"
    } else if has(&["insert", "update", "delete", "upsert"]) {
        "DML Related"
    } else if has(&["test", "assert"]) {
        "Test Related"
    } else if let Some(level) = entry.log_level().filter(|l| !l.is_empty()) {
        return format!("USER_DEBUG ({level})");
    } else {
        "General"
    };
    format!("USER_DEBUG ({bucket})")
}

fn statement_key(entry: &LogEntry) -> String {
    // Line 0 is not a real source line.
    let bucket = match entry.line_number() {
        None | Some(0) => "Unknown Line",
        Some(1..=10) => "Lines 1-10",
        Some(11..=50) => "Lines 11-50",
        Some(51..=100) => "Lines 51-100",
        Some(_) => "Lines 100+",
    };
    format!("STATEMENT_EXECUTE ({bucket})")
}

fn code_unit_key(entry: &LogEntry) -> String {
    let unit = entry.additional_info().first().map(String::as_str);
    let bucket = match unit {
        Some(u) if u.contains("trigger") => "Triggers",
        Some(u) if u.contains("execute_anonymous") => "Anonymous Apex",
        Some(u) if u.contains("webservice") || u.contains("RestResource") => "Web Services",
        Some(u) if u.contains("@future") => "Future Methods",
        Some(u) if u.contains("batch") => "Batch Apex",
        Some(u) if u.contains("schedule") => "Scheduled Apex",
        Some(u) if u.contains("test") => "Test Methods",
        _ => "General",
    };
    format!("{} ({bucket})", entry.event_identifier())
}

fn dml_key(entry: &LogEntry) -> String {
    const OPERATIONS: [(&str, &str); 5] = [
        ("insert", "Insert"),
        ("update", "Update"),
        ("delete", "Delete"),
        ("upsert", "Upsert"),
        ("undelete", "Undelete"),
    ];

    let info = joined_lowercase(entry);
    let bucket = OPERATIONS
        .iter()
        .find(|(needle, _)| info.contains(needle))
        .map_or("General", |(_, label)| label);
    format!("{} ({bucket})", entry.event_identifier())
}

fn soql_key(entry: &LogEntry) -> String {
    let query = entry.additional_info().join(" ");
    if let Some(object) = SOQL_OBJECT.captures(&query).and_then(|caps| caps.get(1)) {
        return format!("{} ({})", entry.event_identifier(), object.as_str());
    }

    let query = query.to_lowercase();
    let bucket = if query.contains("count()") {
        "Count Queries"
    } else if query.contains("limit") {
        "Limited Queries"
    } else if query.contains("order by") {
        "Sorted Queries"
    } else {
        "General"
    };
    format!("{} ({bucket})", entry.event_identifier())
}

fn heap_key(entry: &LogEntry) -> String {
    let info = entry.additional_info().join(" ");
    let bucket = match HEAP_BYTES.captures(&info).and_then(|caps| caps.get(1)) {
        // Digits too long for u64 are still "very large".
        Some(digits) => match digits.as_str().parse::<u64>().unwrap_or(u64::MAX) {
            0..=99 => "Small < 100B",
            100..=999 => "Medium < 1KB",
            1_000..=9_999 => "Large < 10KB",
            _ => "Very Large 10KB+",
        },
        None => "Unknown Size",
    };
    format!("HEAP_ALLOCATE ({bucket})")
}

fn validation_rule_key(entry: &LogEntry) -> String {
    let rule_name = entry
        .additional_info()
        .first()
        .and_then(|field| field.split('|').next())
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "[EXTERNAL]");

    match rule_name {
        Some(name) => format!("VALIDATION_RULE ({name})"),
        None => "VALIDATION_RULE (General)".to_string(),
    }
}

fn workflow_key(entry: &LogEntry) -> String {
    const KEYWORDS: [(&str, &str); 5] = [
        ("rule", "Rules"),
        ("action", "Actions"),
        ("field update", "Field Updates"),
        ("email", "Email Alerts"),
        ("task", "Tasks"),
    ];

    let info = joined_lowercase(entry);
    let bucket = KEYWORDS
        .iter()
        .find(|(needle, _)| info.contains(needle))
        .map_or("General", |(_, label)| label);
    format!("WORKFLOW ({bucket})")
}

fn joined_lowercase(entry: &LogEntry) -> String {
    entry.additional_info().join(" ").to_lowercase()
}

// ===== Ordered buckets =====

/// Insertion-ordered multimap: keys keep first-seen order, values keep push order.
#[derive(Debug)]
pub(crate) struct OrderedBuckets<V> {
    index: HashMap<String, usize>,
    buckets: Vec<(String, Vec<V>)>,
}

impl<V> Default for OrderedBuckets<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }
}

impl<V> OrderedBuckets<V> {
    pub(crate) fn push(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![value]));
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }
}

impl<V> IntoIterator for OrderedBuckets<V> {
    type Item = (String, Vec<V>);
    type IntoIter = std::vec::IntoIter<(String, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

// ===== GroupingStats =====

/// How much sub-grouping split an identifier-level grouping apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingStats {
    /// Groups before heuristics (one per identifier).
    pub original_group_count: usize,
    /// Groups after heuristics.
    pub enhanced_group_count: usize,
    /// Mean entries per enhanced group; 0 when there are no groups.
    pub average_entries_per_group: f64,
    /// Size of the largest enhanced group.
    pub largest_group_size: usize,
}

impl GroupingStats {
    /// Compare identifier-level grouping with the heuristic result.
    pub fn compute(original_group_count: usize, enhanced: &[GroupedLogEntry]) -> Self {
        let total: usize = enhanced.iter().map(GroupedLogEntry::count).sum();
        let largest_group_size = enhanced.iter().map(GroupedLogEntry::count).max().unwrap_or(0);
        let average_entries_per_group = if enhanced.is_empty() {
            0.0
        } else {
            total as f64 / enhanced.len() as f64
        };

        Self {
            original_group_count,
            enhanced_group_count: enhanced.len(),
            average_entries_per_group,
            largest_group_size,
        }
    }
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod tests;
