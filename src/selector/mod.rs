//! Function selector feature - the drop-down list of plottable functions.
//!
//! The selector only tracks which row is highlighted and whether the list is
//! open. Confirming hands the highlighted index back to the caller, which
//! applies it to the registry.

pub mod ui;

/// Drop-down selector state.
#[derive(Debug, Default)]
pub struct SelectorState {
    /// Whether the list is expanded.
    pub open: bool,
    /// Highlighted row while open.
    pub cursor: usize,
    /// Scroll offset of the expanded list.
    pub scroll: usize,
}

impl SelectorState {
    /// Create a new, closed selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the list with `current` highlighted.
    pub fn open(&mut self, current: usize) {
        self.open = true;
        self.cursor = current;
    }

    /// Collapse the list without choosing.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down within `len` entries.
    pub fn cursor_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Collapse the list and return the highlighted row.
    pub fn confirm(&mut self) -> Option<usize> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.cursor)
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }

        if self.cursor >= self.scroll + viewport_height {
            self.scroll = self.cursor.saturating_sub(viewport_height - 1);
        }
    }
}
