//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar in lines.
///
/// File name, totals, execution time and API version on one line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Used in layout calculations for the status bar at the bottom of the screen.
/// Single line for keyboard hints and cursor position.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Lines taken by the tree's border (top + bottom).
pub const TREE_BORDER_HEIGHT: u16 = 2;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the entry popup.
pub const ENTRY_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage for the entry popup.
pub const ENTRY_POPUP_HEIGHT_PERCENT: u16 = 60;

/// Indentation per tree level, in columns.
pub const TREE_INDENT: usize = 2;
