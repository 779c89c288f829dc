//! Domain-level keyboard actions independent of key bindings.

/// Actions the log browser understands.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move selection up one row. Default: k/↑
    SelectPrev,
    /// Move selection down one row. Default: j/↓
    SelectNext,
    /// Move selection up one page. Default: Page Up/Ctrl+u
    PageUp,
    /// Move selection down one page. Default: Page Down/Ctrl+d
    PageDown,
    /// Jump to first row. Default: g/Home
    SelectFirst,
    /// Jump to last row. Default: G/End
    SelectLast,

    // Tree interaction
    /// Expand a collapsed row, or open the raw line of an entry. Default: Enter/l/→
    Activate,
    /// Collapse the current row, or move to its parent. Default: h/←
    Collapse,
    /// Toggle expansion of the current row. Default: Space
    ToggleExpand,
    /// Expand every category and group. Default: E
    ExpandAll,
    /// Collapse everything back to categories. Default: C
    CollapseAll,

    // Overlays
    /// Show source location of the selected entry. Default: o
    ShowSource,
    /// Toggle help overlay. Default: ?
    ToggleHelp,
    /// Close any overlay. Default: Esc
    Dismiss,

    // Application
    /// Quit. Default: q/Ctrl+c
    Quit,
}
