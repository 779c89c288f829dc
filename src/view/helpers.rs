//! Small line builders shared by the overlays.

use super::styles::{BODY_TEXT, KEY_TEXT};
use ratatui::text::{Line, Span};

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `label` in key style, padded to `width`, followed by `value`.
pub fn key_value_line(label: &str, value: impl Into<String>, width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<width$}"), KEY_TEXT),
        Span::styled(value.into(), BODY_TEXT),
    ])
}
