//! Category taxonomy and grouped entries.

use crate::model::LogEntry;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ===== CategoryKind =====

/// One of the 8 fixed taxonomy buckets.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKind {
    /// Execution boundaries and resource usage.
    SystemInfo,
    /// Methods, constructors, statements and debug output.
    CodeExecution,
    /// SOQL, SOSL and DML.
    DatabaseOperations,
    /// Heap allocation events.
    MemoryManagement,
    /// Workflow and validation rules.
    WorkflowValidation,
    /// Reserved; nothing in the static table maps here yet.
    Triggers,
    /// External HTTP callouts.
    Callouts,
    /// Anything not in the table.
    Other,
}

impl CategoryKind {
    /// All kinds in display order.
    pub const ALL: [CategoryKind; 8] = [
        CategoryKind::SystemInfo,
        CategoryKind::CodeExecution,
        CategoryKind::DatabaseOperations,
        CategoryKind::MemoryManagement,
        CategoryKind::WorkflowValidation,
        CategoryKind::Triggers,
        CategoryKind::Callouts,
        CategoryKind::Other,
    ];

    /// Human-readable category name.
    pub fn name(self) -> &'static str {
        match self {
            CategoryKind::SystemInfo => "System Information",
            CategoryKind::CodeExecution => "Code Execution",
            CategoryKind::DatabaseOperations => "Database Operations",
            CategoryKind::MemoryManagement => "Memory Management",
            CategoryKind::WorkflowValidation => "Workflow & Validation",
            CategoryKind::Triggers => "Triggers",
            CategoryKind::Callouts => "Callouts",
            CategoryKind::Other => "Other",
        }
    }

    /// One-sentence description shown under the category name.
    pub fn description(self) -> &'static str {
        match self {
            CategoryKind::SystemInfo => {
                "System information, execution boundaries, and resource usage"
            }
            CategoryKind::CodeExecution => {
                "Apex code execution, method calls, and debug statements"
            }
            CategoryKind::DatabaseOperations => {
                "SOQL queries, DML operations, and database interactions"
            }
            CategoryKind::MemoryManagement => "Heap allocation and memory management operations",
            CategoryKind::WorkflowValidation => {
                "Workflow rules, validation rules, and business logic"
            }
            CategoryKind::Triggers => "Trigger execution and trigger-related operations",
            CategoryKind::Callouts => "External service callouts and HTTP requests",
            CategoryKind::Other => "Other log entries not categorized above",
        }
    }

    /// Stable machine key used in JSON output and entry addresses.
    pub fn key(self) -> &'static str {
        match self {
            CategoryKind::SystemInfo => "system_info",
            CategoryKind::CodeExecution => "code_execution",
            CategoryKind::DatabaseOperations => "database_operations",
            CategoryKind::MemoryManagement => "memory_management",
            CategoryKind::WorkflowValidation => "workflow_validation",
            CategoryKind::Triggers => "triggers",
            CategoryKind::Callouts => "callouts",
            CategoryKind::Other => "other",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a category key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryKind {
    type Err = UnknownCategory;

    /// Accepts the machine key or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s || kind.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for CategoryKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

// ===== GroupedLogEntry =====

/// A named bucket of entries sharing an identifier and a heuristic sub-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedLogEntry {
    #[serde(rename = "type")]
    label: String,
    count: usize,
    entries: Vec<LogEntry>,
}

impl GroupedLogEntry {
    /// Create a group. Entries keep their original file order.
    pub fn new(label: impl Into<String>, entries: Vec<LogEntry>) -> Self {
        let count = entries.len();
        Self {
            label: label.into(),
            count,
            entries,
        }
    }

    /// Group label, e.g. `USER_DEBUG (Errors)`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of entries; always equals `entries().len()`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}

// ===== LogCategory =====

/// One taxonomy bucket with its observed identifiers and sub-groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCategory {
    kind: CategoryKind,
    event_types: Vec<String>,
    groups: Vec<GroupedLogEntry>,
    total_entries: usize,
}

impl LogCategory {
    /// An empty category.
    pub fn empty(kind: CategoryKind) -> Self {
        Self {
            kind,
            event_types: Vec::new(),
            groups: Vec::new(),
            total_entries: 0,
        }
    }

    /// Build a category from its groups.
    ///
    /// Groups are stable-sorted by count, descending; the total is derived
    /// from the groups so the two can never disagree.
    pub fn new(kind: CategoryKind, event_types: Vec<String>, mut groups: Vec<GroupedLogEntry>) -> Self {
        groups.sort_by(|a, b| b.count().cmp(&a.count()));
        let total_entries = groups.iter().map(GroupedLogEntry::count).sum();
        Self {
            kind,
            event_types,
            groups,
            total_entries,
        }
    }

    /// Taxonomy tag.
    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Display name of the category.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Description of the category.
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Distinct identifiers seen in this category, first-seen order.
    pub fn event_types(&self) -> &[String] {
        &self.event_types
    }

    /// Sub-groups, largest first.
    pub fn groups(&self) -> &[GroupedLogEntry] {
        &self.groups
    }

    /// Entries across all groups.
    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// True when no entry landed here.
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}
