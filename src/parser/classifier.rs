//! Static event-identifier → category table.

use crate::model::CategoryKind;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The fixed routing table. Anything not listed is `Other`.
///
/// No identifier routes to `Triggers`; the slot exists for table extensions.
const EVENT_CATEGORIES: &[(&str, CategoryKind)] = &[
    // System information
    ("USER_INFO", CategoryKind::SystemInfo),
    ("EXECUTION_STARTED", CategoryKind::SystemInfo),
    ("EXECUTION_FINISHED", CategoryKind::SystemInfo),
    ("CUMULATIVE_LIMIT_USAGE", CategoryKind::SystemInfo),
    ("CUMULATIVE_LIMIT_USAGE_END", CategoryKind::SystemInfo),
    ("LIMIT_USAGE_FOR_NS", CategoryKind::SystemInfo),
    // Code execution
    ("CODE_UNIT_STARTED", CategoryKind::CodeExecution),
    ("CODE_UNIT_FINISHED", CategoryKind::CodeExecution),
    ("STATEMENT_EXECUTE", CategoryKind::CodeExecution),
    ("USER_DEBUG", CategoryKind::CodeExecution),
    ("CONSTRUCTOR_ENTRY", CategoryKind::CodeExecution),
    ("CONSTRUCTOR_EXIT", CategoryKind::CodeExecution),
    ("METHOD_ENTRY", CategoryKind::CodeExecution),
    ("METHOD_EXIT", CategoryKind::CodeExecution),
    ("VF_APEX_CALL_START", CategoryKind::CodeExecution),
    ("VF_APEX_CALL_END", CategoryKind::CodeExecution),
    ("EXCEPTION_THROWN", CategoryKind::CodeExecution),
    // Database operations
    ("DML_BEGIN", CategoryKind::DatabaseOperations),
    ("DML_END", CategoryKind::DatabaseOperations),
    ("SOQL_EXECUTE_BEGIN", CategoryKind::DatabaseOperations),
    ("SOQL_EXECUTE_END", CategoryKind::DatabaseOperations),
    ("SOSL_EXECUTE_BEGIN", CategoryKind::DatabaseOperations),
    ("SOSL_EXECUTE_END", CategoryKind::DatabaseOperations),
    // Memory management
    ("HEAP_ALLOCATE", CategoryKind::MemoryManagement),
    ("HEAP_DEALLOCATE", CategoryKind::MemoryManagement),
    // Workflow & validation
    ("VALIDATION_RULE", CategoryKind::WorkflowValidation),
    ("VALIDATION_PASS", CategoryKind::WorkflowValidation),
    ("VALIDATION_FAIL", CategoryKind::WorkflowValidation),
    ("WORKFLOW", CategoryKind::WorkflowValidation),
    ("WF_RULE_EVAL_BEGIN", CategoryKind::WorkflowValidation),
    ("WF_RULE_EVAL_END", CategoryKind::WorkflowValidation),
    ("WF_CRITERIA_BEGIN", CategoryKind::WorkflowValidation),
    ("WF_CRITERIA_END", CategoryKind::WorkflowValidation),
    ("WF_ACTIONS_END", CategoryKind::WorkflowValidation),
    // Callouts
    ("CALLOUT_REQUEST", CategoryKind::Callouts),
    ("CALLOUT_RESPONSE", CategoryKind::Callouts),
];

static LOOKUP: LazyLock<HashMap<&'static str, CategoryKind>> =
    LazyLock::new(|| EVENT_CATEGORIES.iter().copied().collect());

/// Route an event identifier to its category. Exact, case-sensitive match.
pub fn classify(event_identifier: &str) -> CategoryKind {
    LOOKUP
        .get(event_identifier)
        .copied()
        .unwrap_or(CategoryKind::Other)
}

/// Identifiers with an explicit route, in table order.
pub fn known_identifiers() -> impl Iterator<Item = &'static str> {
    EVENT_CATEGORIES.iter().map(|(id, _)| *id)
}
