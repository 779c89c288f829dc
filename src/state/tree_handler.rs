//! Tree navigation keyboard action handler.
//!
//! Pure function that transforms BrowserState in response to movement,
//! expansion and overlay actions. Quitting is the caller's concern.

use crate::model::KeyAction;
use crate::report::EntryAddress;
use crate::state::{BrowserState, Overlay, Row};

/// Handle one browser keyboard action.
///
/// # Arguments
/// * `state` - Current browser state to transform
/// * `action` - The action to handle
/// * `page_size` - Rows moved by PageUp/PageDown (visible list height)
///
/// While an overlay is open only Dismiss, ToggleHelp and Quit have effect;
/// any other action closes the overlay first and is otherwise ignored.
pub fn handle_tree_action(mut state: BrowserState, action: KeyAction, page_size: usize) -> BrowserState {
    if state.overlay != Overlay::None {
        state.overlay = match (action, state.overlay) {
            (KeyAction::ToggleHelp, Overlay::Entry(_)) => Overlay::Help,
            _ => Overlay::None,
        };
        return state;
    }

    let selected = state.selected();
    let page = page_size.max(1);

    match action {
        KeyAction::SelectPrev => state.select(selected.saturating_sub(1)),
        KeyAction::SelectNext => state.select(selected.saturating_add(1)),
        KeyAction::PageUp => state.select(selected.saturating_sub(page)),
        KeyAction::PageDown => state.select(selected.saturating_add(page)),
        KeyAction::SelectFirst => state.select(0),
        KeyAction::SelectLast => state.select(usize::MAX),
        KeyAction::Activate => activate(&mut state),
        KeyAction::Collapse => collapse(&mut state),
        KeyAction::ToggleExpand => {
            if let Some(row) = state.selected_row() {
                let expanded = state.is_expanded(row);
                state.set_expanded(row, !expanded);
            }
        }
        KeyAction::ExpandAll => state.expand_all(),
        KeyAction::CollapseAll => state.collapse_all(),
        KeyAction::ShowSource => {
            if let Some(address) = source_target(&state) {
                state.overlay = Overlay::Entry(address);
            }
        }
        KeyAction::ToggleHelp => state.overlay = Overlay::Help,
        KeyAction::Dismiss | KeyAction::Quit => {}
    }

    state
}

/// Expand a collapsed parent, step into an expanded one, or open an entry.
fn activate(state: &mut BrowserState) {
    let Some(row) = state.selected_row() else {
        return;
    };
    match row {
        Row::Entry(address) => state.overlay = Overlay::Entry(address),
        _ if !state.is_expanded(row) => {
            state.set_expanded(row, true);
        }
        _ => {
            // Already open: move onto the first child.
            let next = state.selected() + 1;
            if state.rows().get(next).and_then(|r| r.parent()) == Some(row) {
                state.select(next);
            }
        }
    }
}

/// Collapse an expanded parent, otherwise move to the enclosing row.
fn collapse(state: &mut BrowserState) {
    let Some(row) = state.selected_row() else {
        return;
    };
    if state.is_expanded(row) {
        state.set_expanded(row, false);
        return;
    }
    if let Some(parent) = row.parent() {
        if let Some(index) = state.rows().iter().position(|r| *r == parent) {
            state.select(index);
        }
    }
}

/// Entry whose source ShowSource opens: the selected entry, or a group's first.
fn source_target(state: &BrowserState) -> Option<EntryAddress> {
    match state.selected_row()? {
        Row::Entry(address) => Some(address),
        Row::Group(category, group) => Some(EntryAddress {
            category,
            group,
            entry: 0,
        }),
        Row::Category(_) => None,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "tree_handler_tests.rs"]
mod tests;
