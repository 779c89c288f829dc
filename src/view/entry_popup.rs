//! Entry popup: the raw line of one log entry and where it came from.

use super::constants::{ENTRY_POPUP_HEIGHT_PERCENT, ENTRY_POPUP_WIDTH_PERCENT};
use super::help::{centered_rect, render_dismiss_hint};
use super::helpers::{empty_line, key_value_line};
use super::styles::{BODY_TEXT, SECTION_HEADER};
use crate::report::{source_location, EntryAddress};
use crate::state::BrowserState;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const LABEL_WIDTH: usize = 11;

/// Render the popup for `address`; nothing is drawn if it no longer resolves.
pub fn render_entry_popup(frame: &mut Frame, state: &BrowserState, address: EntryAddress) {
    let Ok(entry) = address.resolve(state.parsed()) else {
        return;
    };

    let popup_area = centered_rect(
        ENTRY_POPUP_WIDTH_PERCENT,
        ENTRY_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        key_value_line("Event", entry.event_identifier(), LABEL_WIDTH),
        key_value_line(
            "Timestamp",
            format!("{} ({})", entry.timestamp(), entry.nanoseconds()),
            LABEL_WIDTH,
        ),
    ];
    if let Some(line_number) = entry.line_number() {
        lines.push(key_value_line("Apex line", line_number.to_string(), LABEL_WIDTH));
    }
    if let Some(level) = entry.log_level() {
        lines.push(key_value_line("Level", level, LABEL_WIDTH));
    }
    if let Some(message) = entry.message() {
        lines.push(key_value_line("Message", message, LABEL_WIDTH));
    }
    lines.push(key_value_line(
        "Source",
        source_location(state.meta(), entry),
        LABEL_WIDTH,
    ));
    lines.push(empty_line());
    lines.push(Line::from(Span::styled("Raw line", SECTION_HEADER)));
    lines.push(Line::from(Span::styled(entry.raw_line().to_string(), BODY_TEXT)));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Entry {address} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, popup_area);
    render_dismiss_hint(frame, popup_area, " Press Esc to close ");
}
