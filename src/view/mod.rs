//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod entry_popup;
mod help;
mod helpers;
mod layout;
mod styles;

pub use entry_popup::render_entry_popup;
pub use help::render_help_overlay;
pub use helpers::{empty_line, key_value_line};
pub use layout::{render_layout, tree_page_size};
pub use styles::{ColorConfig, TreeStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{handle_tree_action, BrowserState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, widgets::ListState, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: Option<BrowserState>,
    key_bindings: KeyBindings,
    list_state: ListState,
    styles: TreeStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(state: BrowserState, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: Some(state),
            key_bindings: KeyBindings::default(),
            list_state: ListState::default(),
            styles: TreeStyles::with_color_config(colors),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        if action == KeyAction::Quit {
            return true;
        }

        let page_size = self.page_size();
        if let Some(state) = self.state.take() {
            self.state = Some(handle_tree_action(state, action, page_size));
        }
        false
    }

    fn page_size(&self) -> usize {
        let height = self.terminal.size().map(|s| s.height).unwrap_or(24);
        tree_page_size(height)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };
        let list_state = &mut self.list_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, list_state, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, state: BrowserState) -> Self {
        Self {
            terminal,
            state: Some(state),
            key_bindings: KeyBindings::default(),
            list_state: ListState::default(),
            styles: TreeStyles::with_color_config(ColorConfig::from_env_and_args(true)),
        }
    }

    pub(crate) fn state(&self) -> &BrowserState {
        self.state.as_ref().expect("state is always present between actions")
    }
}

/// Initialize and run the browser over a parsed log.
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_browser(state: BrowserState, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(state, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_log;
    use crate::report::LogMeta;
    use crate::state::{Overlay, Row};
    use crate::model::CategoryKind;
    use ratatui::backend::TestBackend;

    const LOG: &str = "\
09:15:00.123 (1500)|EXECUTION_STARTED
09:15:00.200 (2000)|USER_DEBUG|[4]|DEBUG|Error: bad input
09:15:00.300 (3000)|HEAP_ALLOCATE|[72]|Bytes:50
09:15:00.500 (650000)|EXECUTION_FINISHED
";

    fn create_test_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = BrowserState::new(parse_log(LOG), LogMeta::default(), false);
        TuiApp::new_for_test(terminal, state)
    }

    fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')), "'q' should trigger quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(key), "Ctrl+C should trigger quit");
    }

    #[test]
    fn handle_key_unbound_returns_false() {
        let mut app = create_test_app();
        assert!(!press(&mut app, KeyCode::Char('z')));
        assert_eq!(app.state().selected(), 0);
    }

    #[test]
    fn handle_key_j_moves_selection() {
        let mut app = create_test_app();
        assert!(!press(&mut app, KeyCode::Char('j')));
        assert_eq!(
            app.state().selected_row(),
            Some(Row::Category(CategoryKind::CodeExecution))
        );
    }

    #[test]
    fn enter_expands_then_opens_entry() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('j'));
        for _ in 0..5 {
            press(&mut app, KeyCode::Enter);
        }
        assert!(matches!(app.state().overlay, Overlay::Entry(_)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().overlay, Overlay::None);
    }

    #[test]
    fn question_mark_opens_help() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state().overlay, Overlay::Help);
    }

    #[test]
    fn page_size_follows_terminal_height() {
        let app = create_test_app();
        assert_eq!(app.page_size(), 20);
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app();
        assert!(app.draw().is_ok(), "Drawing should succeed");

        let buffer = app.terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Code Execution (1)"));
    }
}
