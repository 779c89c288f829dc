//! Tests for browser layout rendering.

use super::*;
use crate::parser::parse_log;
use crate::report::{EntryAddress, LogMeta};
use crate::state::handle_tree_action;
use crate::model::{CategoryKind, KeyAction};
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

// ===== Test Helpers =====

const LOG: &str = "\
64.0 APEX_CODE,DEBUG;DB,INFO
09:15:00.123 (1500)|EXECUTION_STARTED
09:15:00.200 (2000)|USER_DEBUG|[4]|DEBUG|Error: bad input
09:15:00.201 (2100)|USER_DEBUG|[5]|DEBUG|Error: worse input
09:15:00.202 (2200)|USER_DEBUG|[6]|DEBUG|Starting batch job
09:15:00.300 (3000)|HEAP_ALLOCATE|[72]|Bytes:50
09:15:00.500 (650000)|EXECUTION_FINISHED
";

fn meta() -> LogMeta {
    LogMeta {
        file_name: "apex.log".to_string(),
        file_path: Some(PathBuf::from("/logs/apex.log")),
        log_datetime: Some("09:15:00.123".to_string()),
        viewed: Some("2026-10-18".to_string()),
    }
}

fn browser(show_empty: bool) -> BrowserState {
    BrowserState::new(parse_log(LOG), meta(), show_empty)
}

fn styles() -> TreeStyles {
    TreeStyles::with_color_config(ColorConfig::from_env_and_args(true))
}

fn render(state: &BrowserState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut list_state = ListState::default();
    terminal
        .draw(|frame| render_layout(frame, state, &mut list_state, &styles()))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== Header / status =====

#[test]
fn header_shows_file_totals_and_version() {
    let rendered = render(&browser(false), 100, 20);
    let header = rendered.lines().next().unwrap();

    assert!(header.contains("apex.log"));
    assert!(header.contains("6 entries"));
    assert!(header.contains("0.65ms"));
    assert!(header.contains("API 64.0"));
    assert!(header.contains("viewed 2026-10-18"));
}

#[test]
fn status_bar_shows_position() {
    let rendered = render(&browser(false), 100, 20);
    let status = rendered.lines().last().unwrap();

    assert!(status.contains("q: quit"));
    assert!(status.contains("[1/3]"));
}

// ===== Tree =====

#[test]
fn collapsed_tree_lists_categories_with_counts() {
    let rendered = render(&browser(false), 80, 20);

    assert!(rendered.contains("▸ System Information (2)"));
    assert!(rendered.contains("▸ Code Execution (3)"));
    assert!(rendered.contains("▸ Memory Management (1)"));
    assert!(!rendered.contains("Triggers"));
}

#[test]
fn empty_categories_shown_without_marker_when_enabled() {
    let rendered = render(&browser(true), 80, 20);
    assert!(rendered.contains("  Triggers (0)"));
    assert!(rendered.contains("  Callouts (0)"));
}

#[test]
fn expanded_tree_shows_groups_and_entries() {
    let state = handle_tree_action(browser(false), KeyAction::ExpandAll, 10);
    let rendered = render(&state, 100, 24);

    assert!(rendered.contains("▾ Code Execution (3)"));
    assert!(rendered.contains("▾ USER_DEBUG (Errors) (2)"));
    assert!(rendered.contains("09:15:00.200  [4] Error: bad input"));
    assert!(rendered.contains("09:15:00.300  [72] | Bytes:50"));
}

#[test]
fn empty_log_shows_placeholder() {
    let state = BrowserState::new(parse_log(""), LogMeta::default(), false);
    let rendered = render(&state, 80, 10);
    assert!(rendered.contains("No log entries found"));
}

#[test]
fn row_line_indents_by_level() {
    let state = handle_tree_action(browser(false), KeyAction::ExpandAll, 10);
    let group = row_line(&state, Row::Group(CategoryKind::MemoryManagement, 0), &styles());
    let entry = row_line(
        &state,
        Row::Entry(EntryAddress {
            category: CategoryKind::MemoryManagement,
            group: 0,
            entry: 0,
        }),
        &styles(),
    );

    assert!(group.to_string().starts_with("  ▾ HEAP_ALLOCATE"));
    assert!(entry.to_string().starts_with("    09:15:00.300"));
}

// ===== Overlays =====

#[test]
fn help_overlay_drawn_over_tree() {
    let state = handle_tree_action(browser(false), KeyAction::ToggleHelp, 10);
    let rendered = render(&state, 80, 30);
    assert!(rendered.contains("Keyboard Shortcuts"));
}

#[test]
fn entry_popup_shows_raw_line_and_location() {
    let mut state = browser(false);
    state.overlay = Overlay::Entry(EntryAddress {
        category: CategoryKind::CodeExecution,
        group: 0,
        entry: 1,
    });
    let rendered = render(&state, 120, 30);

    assert!(rendered.contains("Entry code_execution:0:1"));
    assert!(rendered.contains("USER_DEBUG"));
    assert!(rendered.contains("Error: worse input"));
    assert!(rendered.contains("/logs/apex.log:4"));
    assert!(rendered.contains("09:15:00.201 (2100)|USER_DEBUG|[5]|DEBUG|Error: worse input"));
}

#[test]
fn page_size_excludes_chrome() {
    assert_eq!(tree_page_size(24), 20);
    assert_eq!(tree_page_size(3), 1);
    assert_eq!(tree_page_size(0), 1);
}
