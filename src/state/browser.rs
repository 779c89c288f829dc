//! Browser state: which tree rows are expanded, which one is selected.
//!
//! The tree has three levels: category → group → entry. Only the rows under
//! expanded parents are visible; `rows` is rebuilt after every change so the
//! renderer and the handlers index the same flat list.

use crate::model::{CategoryKind, LogEntry, ParsedLog};
use crate::report::{EntryAddress, LogMeta};
use std::collections::HashSet;

/// One visible line of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    /// A category header.
    Category(CategoryKind),
    /// A group inside a category.
    Group(CategoryKind, usize),
    /// One entry inside a group.
    Entry(EntryAddress),
}

impl Row {
    /// The enclosing row, `None` for categories.
    pub fn parent(self) -> Option<Row> {
        match self {
            Row::Category(_) => None,
            Row::Group(kind, _) => Some(Row::Category(kind)),
            Row::Entry(address) => Some(Row::Group(address.category, address.group)),
        }
    }

    /// Category this row belongs to.
    pub fn category(self) -> CategoryKind {
        match self {
            Row::Category(kind) | Row::Group(kind, _) => kind,
            Row::Entry(address) => address.category,
        }
    }
}

/// Modal overlay shown above the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No overlay.
    #[default]
    None,
    /// Keyboard shortcuts.
    Help,
    /// Raw line and source location of an entry.
    Entry(EntryAddress),
}

/// Everything the browser needs to render one frame.
#[derive(Debug, Clone)]
pub struct BrowserState {
    parsed: ParsedLog,
    meta: LogMeta,
    show_empty_categories: bool,
    expanded_categories: HashSet<CategoryKind>,
    expanded_groups: HashSet<(CategoryKind, usize)>,
    rows: Vec<Row>,
    selected: usize,
    /// Current overlay.
    pub overlay: Overlay,
}

impl BrowserState {
    /// Start with every category collapsed and the first row selected.
    pub fn new(parsed: ParsedLog, meta: LogMeta, show_empty_categories: bool) -> Self {
        let mut state = Self {
            parsed,
            meta,
            show_empty_categories,
            expanded_categories: HashSet::new(),
            expanded_groups: HashSet::new(),
            rows: Vec::new(),
            selected: 0,
            overlay: Overlay::None,
        };
        state.rebuild_rows();
        state
    }

    // ===== Accessors =====

    /// The log being browsed.
    pub fn parsed(&self) -> &ParsedLog {
        &self.parsed
    }

    /// Where the log came from.
    pub fn meta(&self) -> &LogMeta {
        &self.meta
    }

    /// Visible rows, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected row, `None` when nothing is visible.
    pub fn selected_row(&self) -> Option<Row> {
        self.rows.get(self.selected).copied()
    }

    /// The entry under the cursor, if the cursor is on an entry row.
    pub fn selected_entry(&self) -> Option<(EntryAddress, &LogEntry)> {
        match self.selected_row()? {
            Row::Entry(address) => address.resolve(&self.parsed).ok().map(|e| (address, e)),
            _ => None,
        }
    }

    /// Is this category or group expanded? Entries never are.
    pub fn is_expanded(&self, row: Row) -> bool {
        match row {
            Row::Category(kind) => self.expanded_categories.contains(&kind),
            Row::Group(kind, group) => self.expanded_groups.contains(&(kind, group)),
            Row::Entry(_) => false,
        }
    }

    /// Can this row be expanded at all?
    pub fn has_children(&self, row: Row) -> bool {
        match row {
            Row::Category(kind) => !self.parsed.category(kind).is_empty(),
            Row::Group(..) => true,
            Row::Entry(_) => false,
        }
    }

    // ===== Mutation =====

    /// Move the cursor to `index`, clamped to the visible rows.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.rows.len().saturating_sub(1));
    }

    /// Expand or collapse one row. Returns whether anything changed.
    pub fn set_expanded(&mut self, row: Row, expanded: bool) -> bool {
        if expanded && !self.has_children(row) {
            return false;
        }
        let changed = match row {
            Row::Category(kind) if expanded => self.expanded_categories.insert(kind),
            Row::Category(kind) => self.expanded_categories.remove(&kind),
            Row::Group(kind, group) if expanded => self.expanded_groups.insert((kind, group)),
            Row::Group(kind, group) => self.expanded_groups.remove(&(kind, group)),
            Row::Entry(_) => false,
        };
        if changed {
            self.rebuild_rows();
        }
        changed
    }

    /// Expand every non-empty category and every group.
    pub fn expand_all(&mut self) {
        for category in self.parsed.non_empty_categories() {
            self.expanded_categories.insert(category.kind());
            for group in 0..category.groups().len() {
                self.expanded_groups.insert((category.kind(), group));
            }
        }
        self.rebuild_rows();
    }

    /// Collapse everything back to category rows.
    pub fn collapse_all(&mut self) {
        self.expanded_categories.clear();
        self.expanded_groups.clear();
        self.rebuild_rows();
    }

    /// Recompute visible rows, keeping the cursor on the same row or its
    /// closest visible ancestor.
    fn rebuild_rows(&mut self) {
        let previous = self.selected_row();

        let mut rows = Vec::new();
        for category in self.parsed.categories() {
            if category.is_empty() && !self.show_empty_categories {
                continue;
            }
            let kind = category.kind();
            rows.push(Row::Category(kind));
            if !self.expanded_categories.contains(&kind) {
                continue;
            }
            for (group_index, group) in category.groups().iter().enumerate() {
                rows.push(Row::Group(kind, group_index));
                if !self.expanded_groups.contains(&(kind, group_index)) {
                    continue;
                }
                rows.extend((0..group.count()).map(|entry| {
                    Row::Entry(EntryAddress {
                        category: kind,
                        group: group_index,
                        entry,
                    })
                }));
            }
        }
        self.rows = rows;

        let mut target = previous;
        while let Some(row) = target {
            if let Some(index) = self.rows.iter().position(|r| *r == row) {
                self.selected = index;
                return;
            }
            target = row.parent();
        }
        self.select(self.selected);
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
