use super::*;
use crate::parser::tokenize_line;

fn entry(line: &str) -> LogEntry {
    tokenize_line(line, 1).expect("test line tokenizes")
}

fn key(line: &str) -> String {
    let entry = entry(line);
    Heuristic::for_identifier(entry.event_identifier()).group_key(&entry)
}

// ===== USER_DEBUG =====

#[test]
fn user_debug_error_message() {
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|Error: bad input"),
        "USER_DEBUG (Errors)"
    );
}

#[test]
fn user_debug_start_message() {
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|Starting batch job"),
        "USER_DEBUG (Start/Begin)"
    );
}

#[test]
fn user_debug_priority_order() {
    // "error" outranks "start".
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|start failed with exception"),
        "USER_DEBUG (Errors)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|Job complete"),
        "USER_DEBUG (End/Finish)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|Running SOQL"),
        "USER_DEBUG (Query Related)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|upsert 3 rows"),
        "USER_DEBUG (DML Related)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|assert ok"),
        "USER_DEBUG (Test Related)"
    );
}

#[test]
fn user_debug_falls_back_to_log_level() {
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|WARN|hello world"),
        "USER_DEBUG (WARN)"
    );
}

#[test]
fn user_debug_without_level_is_general() {
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]||hello world"),
        "USER_DEBUG (General)"
    );
}

#[test]
fn user_debug_missing_message() {
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG"),
        "USER_DEBUG (No Message)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|USER_DEBUG|[4]|DEBUG|"),
        "USER_DEBUG (No Message)"
    );
}

// ===== STATEMENT_EXECUTE =====

#[test]
fn statement_line_ranges() {
    let cases = [
        ("[1]", "Lines 1-10"),
        ("[10]", "Lines 1-10"),
        ("[11]", "Lines 11-50"),
        ("[50]", "Lines 11-50"),
        ("[100]", "Lines 51-100"),
        ("[101]", "Lines 100+"),
        ("[0]", "Unknown Line"),
        ("EXTERNAL", "Unknown Line"),
    ];
    for (field, bucket) in cases {
        let line = format!("10:00:00.000 (1)|STATEMENT_EXECUTE|{field}");
        assert_eq!(key(&line), format!("STATEMENT_EXECUTE ({bucket})"), "{field}");
    }
}

#[test]
fn statement_without_fields_is_unknown() {
    assert_eq!(
        key("10:00:00.000 (1)|STATEMENT_EXECUTE"),
        "STATEMENT_EXECUTE (Unknown Line)"
    );
}

// ===== CODE_UNIT =====

#[test]
fn code_unit_kinds_use_identifier_prefix() {
    assert_eq!(
        key("10:00:00.000 (1)|CODE_UNIT_STARTED|[EXTERNAL]|01q|AccountTrigger on Account trigger event BeforeInsert"),
        "CODE_UNIT_STARTED (General)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|CODE_UNIT_FINISHED|execute_anonymous_apex"),
        "CODE_UNIT_FINISHED (Anonymous Apex)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|CODE_UNIT_STARTED|MyService RestResource"),
        "CODE_UNIT_STARTED (Web Services)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|CODE_UNIT_STARTED|Foo.bar @future"),
        "CODE_UNIT_STARTED (Future Methods)"
    );
}

#[test]
fn code_unit_match_is_case_sensitive() {
    assert_eq!(
        key("10:00:00.000 (1)|CODE_UNIT_STARTED|Trigger thing"),
        "CODE_UNIT_STARTED (General)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|CODE_UNIT_STARTED|AccountHandler trigger"),
        "CODE_UNIT_STARTED (Triggers)"
    );
}

// ===== DML / SOQL =====

#[test]
fn dml_operation_from_any_field() {
    assert_eq!(
        key("10:00:00.000 (1)|DML_BEGIN|[5]|Op:Insert|Type:Account|Rows:1"),
        "DML_BEGIN (Insert)"
    );
    assert_eq!(key("10:00:00.000 (1)|DML_END|[5]"), "DML_END (General)");
}

#[test]
fn soql_extracts_object_name() {
    assert_eq!(
        key("10:00:00.000 (1)|SOQL_EXECUTE_BEGIN|[3]|Aggregations:0|SELECT Id, Name FROM Account WHERE Id != null"),
        "SOQL_EXECUTE_BEGIN (Account)"
    );
}

#[test]
fn soql_object_match_is_case_insensitive_but_keeps_capture() {
    assert_eq!(
        key("10:00:00.000 (1)|SOQL_EXECUTE_BEGIN|select id from contact"),
        "SOQL_EXECUTE_BEGIN (contact)"
    );
}

#[test]
fn soql_shape_fallbacks() {
    assert_eq!(
        key("10:00:00.000 (1)|SOQL_EXECUTE_END|[3]|Rows:1|count()"),
        "SOQL_EXECUTE_END (Count Queries)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|SOQL_EXECUTE_END|[3]|LIMIT 10"),
        "SOQL_EXECUTE_END (Limited Queries)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|SOQL_EXECUTE_END|[3]|Rows:4"),
        "SOQL_EXECUTE_END (General)"
    );
}

// ===== HEAP / VALIDATION / WORKFLOW =====

#[test]
fn heap_size_buckets() {
    assert_eq!(
        key("10:00:00.000 (1)|HEAP_ALLOCATE|[72]|Bytes:50"),
        "HEAP_ALLOCATE (Small < 100B)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|HEAP_ALLOCATE|[72]|Bytes:500"),
        "HEAP_ALLOCATE (Medium < 1KB)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|HEAP_ALLOCATE|[72]|Bytes:5000"),
        "HEAP_ALLOCATE (Large < 10KB)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|HEAP_ALLOCATE|[72]|Bytes:10000"),
        "HEAP_ALLOCATE (Very Large 10KB+)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|HEAP_ALLOCATE|[72]|Bytes:99999999999999999999999"),
        "HEAP_ALLOCATE (Very Large 10KB+)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|HEAP_ALLOCATE|[72]"),
        "HEAP_ALLOCATE (Unknown Size)"
    );
}

#[test]
fn heap_size_needs_ascii_digits() {
    assert_eq!(
        key("10:00:00.000 (1)|HEAP_ALLOCATE|[72]|Bytes:\u{0665}\u{0660}"),
        "HEAP_ALLOCATE (Unknown Size)"
    );
}

#[test]
fn validation_rule_name_or_general() {
    assert_eq!(
        key("10:00:00.000 (1)|VALIDATION_RULE|Require_Email|03d000000000001"),
        "VALIDATION_RULE (Require_Email)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|VALIDATION_RULE|[EXTERNAL]|x"),
        "VALIDATION_RULE (General)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|VALIDATION_RULE"),
        "VALIDATION_RULE (General)"
    );
}

#[test]
fn workflow_keywords() {
    assert_eq!(
        key("10:00:00.000 (1)|WORKFLOW|Evaluating Rule X"),
        "WORKFLOW (Rules)"
    );
    assert_eq!(
        key("10:00:00.000 (1)|WORKFLOW|Send Email"),
        "WORKFLOW (Email Alerts)"
    );
    assert_eq!(key("10:00:00.000 (1)|WORKFLOW|noop"), "WORKFLOW (General)");
}

#[test]
fn unknown_identifier_is_its_own_group() {
    assert_eq!(
        key("10:00:00.000 (1)|METHOD_ENTRY|[5]|Foo.bar()"),
        "METHOD_ENTRY"
    );
}

// ===== group_entries =====

#[test]
fn group_entries_sorts_by_count_descending() {
    let entries = vec![
        entry("10:00:00.000 (1)|USER_DEBUG|[1]|DEBUG|begin"),
        entry("10:00:00.000 (2)|USER_DEBUG|[2]|DEBUG|error one"),
        entry("10:00:00.000 (3)|USER_DEBUG|[3]|DEBUG|error two"),
    ];
    let groups = group_entries("USER_DEBUG", entries);

    let labels: Vec<&str> = groups.iter().map(GroupedLogEntry::label).collect();
    assert_eq!(labels, vec!["USER_DEBUG (Errors)", "USER_DEBUG (Start/Begin)"]);
    assert_eq!(groups[0].count(), 2);
}

#[test]
fn group_entries_ties_keep_discovery_order_and_file_order() {
    let entries = vec![
        entry("10:00:00.000 (1)|HEAP_ALLOCATE|[1]|Bytes:5000"),
        entry("10:00:00.000 (2)|HEAP_ALLOCATE|[1]|Bytes:5"),
        entry("10:00:00.000 (3)|HEAP_ALLOCATE|[1]|Bytes:6000"),
        entry("10:00:00.000 (4)|HEAP_ALLOCATE|[1]|Bytes:7"),
    ];
    let groups = group_entries("HEAP_ALLOCATE", entries);

    assert_eq!(groups[0].label(), "HEAP_ALLOCATE (Large < 10KB)");
    assert_eq!(groups[1].label(), "HEAP_ALLOCATE (Small < 100B)");
    let nanos: Vec<u64> = groups[0].entries().iter().map(LogEntry::nanoseconds).collect();
    assert_eq!(nanos, vec![1, 3]);
}

#[test]
fn group_entries_of_nothing_is_empty() {
    assert!(group_entries("USER_DEBUG", Vec::new()).is_empty());
}

// ===== GroupingStats =====

#[test]
fn stats_summarize_enhanced_groups() {
    let groups = group_entries(
        "USER_DEBUG",
        vec![
            entry("10:00:00.000 (1)|USER_DEBUG|[1]|DEBUG|error"),
            entry("10:00:00.000 (2)|USER_DEBUG|[1]|DEBUG|error"),
            entry("10:00:00.000 (3)|USER_DEBUG|[1]|DEBUG|error"),
            entry("10:00:00.000 (4)|USER_DEBUG|[1]|DEBUG|begin"),
        ],
    );
    let stats = GroupingStats::compute(1, &groups);

    assert_eq!(stats.original_group_count, 1);
    assert_eq!(stats.enhanced_group_count, 2);
    assert_eq!(stats.largest_group_size, 3);
    assert_eq!(stats.average_entries_per_group, 2.0);
}

#[test]
fn stats_of_no_groups_are_zero() {
    let stats = GroupingStats::compute(0, &[]);
    assert_eq!(stats.enhanced_group_count, 0);
    assert_eq!(stats.largest_group_size, 0);
    assert_eq!(stats.average_entries_per_group, 0.0);
}

// ===== OrderedBuckets =====

#[test]
fn ordered_buckets_keep_first_seen_key_order() {
    let mut buckets = OrderedBuckets::default();
    buckets.push("b", 1);
    buckets.push("a", 2);
    buckets.push("b", 3);
    assert_eq!(buckets.len(), 2);

    let collected: Vec<(String, Vec<i32>)> = buckets.into_iter().collect();
    assert_eq!(
        collected,
        vec![("b".to_string(), vec![1, 3]), ("a".to_string(), vec![2])]
    );
}
