//! Tree row styling configuration.
//!
//! Provides distinct colors for the three tree levels and for USER_DEBUG
//! levels, with a NO_COLOR switch.

use ratatui::style::{Color, Modifier, Style};

/// Category headers in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Dim hint text.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Keys in the help overlay and popup labels.
pub const KEY_TEXT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Plain descriptive text.
pub const BODY_TEXT: Style = Style::new().fg(Color::White);

/// Highlight applied to the selected tree row.
pub const SELECTED_ROW: Style = Style::new().add_modifier(Modifier::REVERSED);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TreeStyles =====

/// Styles for the category → group → entry tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeStyles {
    category: Style,
    empty_category: Style,
    group: Style,
    entry: Style,
    error: Style,
    warning: Style,
}

impl TreeStyles {
    /// Create TreeStyles with the specified color configuration.
    ///
    /// Disabled colors keep bold/dim modifiers so the tree levels stay readable.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                category: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                empty_category: Style::default().fg(Color::DarkGray),
                group: Style::default().fg(Color::Green),
                entry: Style::default().fg(Color::Gray),
                error: Style::default().fg(Color::Red),
                warning: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                category: Style::default().add_modifier(Modifier::BOLD),
                empty_category: Style::default().add_modifier(Modifier::DIM),
                group: Style::default(),
                entry: Style::default(),
                error: Style::default(),
                warning: Style::default(),
            }
        }
    }

    /// Category header style; empty categories are dimmed.
    pub fn category(&self, is_empty: bool) -> Style {
        if is_empty {
            self.empty_category
        } else {
            self.category
        }
    }

    /// Group row style.
    pub fn group(&self) -> Style {
        self.group
    }

    /// Entry style, colored by USER_DEBUG level when there is one.
    pub fn entry(&self, log_level: Option<&str>) -> Style {
        match log_level {
            Some(level) if level.eq_ignore_ascii_case("ERROR") => self.error,
            Some(level) if level.eq_ignore_ascii_case("WARN") => self.warning,
            _ => self.entry,
        }
    }
}

impl Default for TreeStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
