//! Browser layout rendering.
//!
//! Header (file and totals), the category tree, and a status bar, with the
//! active overlay drawn on top.

use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, TREE_BORDER_HEIGHT, TREE_INDENT};
use super::styles::{TreeStyles, SELECTED_ROW};
use super::{entry_popup, help};
use crate::state::{BrowserState, Overlay, Row};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the whole browser frame.
///
/// `list_state` carries the scroll offset between frames; its selection is
/// overwritten from `state` before drawing.
pub fn render_layout(
    frame: &mut Frame,
    state: &BrowserState,
    list_state: &mut ListState,
    styles: &TreeStyles,
) {
    let [header_area, tree_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    render_header(frame, header_area, state);
    render_tree(frame, tree_area, state, list_state, styles);
    render_status_bar(frame, status_area, state);

    match state.overlay {
        Overlay::None => {}
        Overlay::Help => help::render_help_overlay(frame),
        Overlay::Entry(address) => entry_popup::render_entry_popup(frame, state, address),
    }
}

/// Rows visible in the tree for a terminal of `height` lines.
pub fn tree_page_size(height: u16) -> usize {
    usize::from(
        height
            .saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT + TREE_BORDER_HEIGHT)
            .max(1),
    )
}

fn render_tree(
    frame: &mut Frame,
    area: Rect,
    state: &BrowserState,
    list_state: &mut ListState,
    styles: &TreeStyles,
) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.rows().is_empty() {
        let empty = Paragraph::new("No log entries found").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .rows()
        .iter()
        .map(|row| ListItem::new(row_line(state, *row, styles)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(SELECTED_ROW);

    list_state.select(Some(state.selected()));
    frame.render_stateful_widget(list, area, list_state);
}

/// One tree line: indentation, fold marker, text, count.
pub(super) fn row_line(state: &BrowserState, row: Row, styles: &TreeStyles) -> Line<'static> {
    let parsed = state.parsed();
    let marker = if !state.has_children(row) {
        " "
    } else if state.is_expanded(row) {
        "▾"
    } else {
        "▸"
    };

    match row {
        Row::Category(kind) => {
            let category = parsed.category(kind);
            Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(
                    format!("{} ({})", category.name(), category.total_entries()),
                    styles.category(category.is_empty()),
                ),
            ])
        }
        Row::Group(kind, index) => {
            let text = parsed
                .group_at(kind, index)
                .map(|g| format!("{} ({})", g.label(), g.count()))
                .unwrap_or_default();
            Line::from(vec![
                Span::raw(format!("{}{marker} ", indent(1))),
                Span::styled(text, styles.group()),
            ])
        }
        Row::Entry(address) => {
            let Ok(entry) = address.resolve(parsed) else {
                return Line::from("");
            };
            let summary = entry
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| entry.additional_info().join(" | "));
            let line_ref = entry
                .line_number()
                .map(|n| format!("[{n}] "))
                .unwrap_or_default();
            Line::from(vec![
                Span::raw(indent(2)),
                Span::styled(
                    format!("{}  {line_ref}{summary}", entry.timestamp()),
                    styles.entry(entry.log_level()),
                ),
            ])
        }
    }
}

fn indent(level: usize) -> String {
    " ".repeat(level * TREE_INDENT)
}

/// Header: file name, totals, duration, API version, viewed date.
fn render_header(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let parsed = state.parsed();
    let meta = state.meta();

    let mut parts = vec![
        meta.file_name.clone(),
        format!("{} entries", parsed.total_entries()),
        format!("{:.2}ms", parsed.execution_time_ms()),
    ];
    if let Some(version) = parsed.api_version() {
        parts.push(format!("API {version}"));
    }
    if let Some(viewed) = &meta.viewed {
        parts.push(format!("viewed {viewed}"));
    }

    let paragraph =
        Paragraph::new(Line::from(parts.join(" | "))).style(Style::default().fg(Color::Cyan));
    frame.render_widget(paragraph, area);
}

/// Status bar: key hints and cursor position.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let position = if state.rows().is_empty() {
        String::new()
    } else {
        format!(" [{}/{}]", state.selected() + 1, state.rows().len())
    };
    let status_text =
        format!("q: quit | ?: help | Enter: open | h: close | E/C: expand/collapse all{position}");

    let paragraph = Paragraph::new(Line::from(status_text)).style(Style::default().fg(Color::Gray));
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
