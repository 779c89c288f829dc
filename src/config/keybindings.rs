//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Cursor movement
        keys.bind(KeyCode::Char('j'), none, KeyAction::SelectNext);
        keys.bind(KeyCode::Down, none, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Up, none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('g'), none, KeyAction::SelectFirst);
        keys.bind(KeyCode::Home, none, KeyAction::SelectFirst);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);
        keys.bind(KeyCode::End, none, KeyAction::SelectLast);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        // Tree
        keys.bind(KeyCode::Enter, none, KeyAction::Activate);
        keys.bind(KeyCode::Char('l'), none, KeyAction::Activate);
        keys.bind(KeyCode::Right, none, KeyAction::Activate);
        keys.bind(KeyCode::Char('h'), none, KeyAction::Collapse);
        keys.bind(KeyCode::Left, none, KeyAction::Collapse);
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleExpand);
        keys.bind(KeyCode::Char('E'), KeyModifiers::SHIFT, KeyAction::ExpandAll);
        keys.bind(KeyCode::Char('C'), KeyModifiers::SHIFT, KeyAction::CollapseAll);

        // Overlays
        keys.bind(KeyCode::Char('o'), none, KeyAction::ShowSource);
        keys.bind(KeyCode::Char('?'), none, KeyAction::ToggleHelp);
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::ToggleHelp);
        keys.bind(KeyCode::Esc, none, KeyAction::Dismiss);

        // Application
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
