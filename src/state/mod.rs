//! Browser state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod browser;
pub mod tree_handler;

// Re-export for convenience
pub use browser::{BrowserState, Overlay, Row};
pub use tree_handler::handle_tree_action;
