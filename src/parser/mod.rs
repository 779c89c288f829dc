//! Debug-log parser.
//!
//! Pure functions turning raw debug-log text into a categorized ParsedLog.
//! Nothing in here does I/O; malformed lines are dropped silently.

pub mod classifier;
pub mod grouping;
pub mod tokenizer;

pub use classifier::{classify, known_identifiers};
pub use grouping::{group_entries, GroupingStats, Heuristic};
pub use tokenizer::{extract_line_number, parse_header, tokenize_line, DebugHeader};

use crate::model::{CategoryKind, LogCategory, LogEntry, ParsedLog};
use grouping::OrderedBuckets;
use std::collections::BTreeMap;
use tracing::debug;

const COMMENT_MARKER: &str = "//";
const EXECUTION_STARTED: &str = "EXECUTION_STARTED";
const EXECUTION_FINISHED: &str = "EXECUTION_FINISHED";

/// Parse a whole debug log.
///
/// Never fails: blank lines, comment lines and anything that does not
/// tokenize are skipped. An empty input yields a report with 8 empty
/// categories and zero execution time.
pub fn parse_log(content: &str) -> ParsedLog {
    let mut header = DebugHeader::default();
    let mut execution = ExecutionWindow::default();
    let mut by_category: BTreeMap<CategoryKind, OrderedBuckets<LogEntry>> = BTreeMap::new();
    let mut skipped = 0usize;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        if let Some(found) = parse_header(trimmed) {
            // Later headers with a version replace earlier ones.
            if found.api_version.is_some() {
                header = found;
            }
            continue;
        }

        let Some(entry) = tokenize_line(line, index + 1) else {
            skipped += 1;
            continue;
        };

        execution.observe(&entry);
        by_category
            .entry(classify(entry.event_identifier()))
            .or_default()
            .push(entry.event_identifier().to_string(), entry);
    }

    let categories: Vec<LogCategory> = by_category
        .into_iter()
        .map(|(kind, identifiers)| build_category(kind, identifiers))
        .collect();

    let parsed = ParsedLog::new(
        categories,
        execution.duration_ms(),
        header.api_version,
        header.debug_levels,
    );
    debug!(
        total_entries = parsed.total_entries(),
        skipped_lines = skipped,
        execution_time_ms = parsed.execution_time_ms(),
        "Parsed debug log"
    );
    parsed
}

/// Sub-group every identifier of one category and assemble the category.
fn build_category(kind: CategoryKind, identifiers: OrderedBuckets<LogEntry>) -> LogCategory {
    let original_group_count = identifiers.len();
    let mut event_types = Vec::with_capacity(original_group_count);
    let mut groups = Vec::new();

    for (identifier, entries) in identifiers {
        groups.extend(group_entries(&identifier, entries));
        event_types.push(identifier);
    }

    let stats = GroupingStats::compute(original_group_count, &groups);
    debug!(
        category = kind.name(),
        original_groups = stats.original_group_count,
        enhanced_groups = stats.enhanced_group_count,
        average_group_size = stats.average_entries_per_group,
        largest_group = stats.largest_group_size,
        "Grouped category"
    );

    LogCategory::new(kind, event_types, groups)
}

/// Nanosecond counters of the last execution start/finish markers.
#[derive(Debug, Default)]
struct ExecutionWindow {
    started: Option<u64>,
    finished: Option<u64>,
}

impl ExecutionWindow {
    fn observe(&mut self, entry: &LogEntry) {
        match entry.event_identifier() {
            EXECUTION_STARTED => self.started = Some(entry.nanoseconds()),
            EXECUTION_FINISHED => self.finished = Some(entry.nanoseconds()),
            _ => {}
        }
    }

    /// Milliseconds between the markers; 0 unless both were seen.
    /// A finish before the start gives a negative duration.
    fn duration_ms(&self) -> f64 {
        match (self.started, self.finished) {
            (Some(start), Some(end)) => (i128::from(end) - i128::from(start)) as f64 / 1_000_000.0,
            _ => 0.0,
        }
    }
}
