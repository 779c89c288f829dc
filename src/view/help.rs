//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::empty_line;
use super::styles::{BODY_TEXT, KEY_TEXT, MUTED_TEXT, SECTION_HEADER};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Next row"),
            ("k/↑", "Previous row"),
            ("Ctrl+d/Page Down", "Page down"),
            ("Ctrl+u/Page Up", "Page up"),
            ("g/Home", "First row"),
            ("G/End", "Last row"),
        ],
    ),
    (
        "Tree",
        &[
            ("Enter/l/→", "Expand, or open entry"),
            ("h/←", "Collapse, or go to parent"),
            ("Space", "Toggle expand/collapse"),
            ("E", "Expand everything"),
            ("C", "Collapse everything"),
        ],
    ),
    (
        "Entries",
        &[
            ("o", "Show raw line and source location"),
            ("Esc", "Close popup"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
///
/// The overlay is centered on the screen with a border and dismissal hint.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
    render_dismiss_hint(frame, popup_area, " Press Esc or ? to close ");
}

/// One dim line centered on the bottom border of `popup_area`.
pub(super) fn render_dismiss_hint(frame: &mut Frame, popup_area: Rect, text: &'static str) {
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        text,
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a centered rect.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (section, keys)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(vec![Span::styled(*section, SECTION_HEADER)]));
        lines.extend(keys.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<18}"), KEY_TEXT),
                Span::styled(*desc, BODY_TEXT),
            ])
        }));
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
