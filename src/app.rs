//! Application state and logic.

use std::cell::Cell;
use std::rc::Rc;

use crate::plot::{PlotConfig, PlotRange};
use crate::registry::{FunctionEntry, Registry};
use crate::selector::SelectorState;
use crate::shared::LayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Plottable functions and the current selection.
    pub registry: Registry,
    /// Drop-down selector state.
    pub selector: SelectorState,
    /// Renderer constants.
    pub plot_config: PlotConfig,
    /// Screen layout constants.
    pub layout: LayoutConfig,
    /// Range computed by the most recent draw.
    pub last_range: Option<PlotRange>,
    /// Status message.
    pub status: String,
    /// Whether the status message reports an error.
    pub status_is_error: bool,
    /// Current theme.
    pub theme: Theme,
    dirty: Rc<Cell<bool>>,
}

impl App {
    /// Create a new application instance around `registry`.
    pub fn new(mut registry: Registry) -> Self {
        let dirty = Rc::new(Cell::new(true));

        let flag = Rc::clone(&dirty);
        registry.subscribe(move |_| flag.set(true));

        let status = match registry.current() {
            Some(entry) => format!("Plotting {}", entry.name),
            None => "No functions registered".to_string(),
        };

        Self {
            registry,
            selector: SelectorState::new(),
            plot_config: PlotConfig::default(),
            layout: LayoutConfig::default(),
            last_range: None,
            status,
            status_is_error: false,
            theme: Theme::GruvboxDark,
            dirty,
        }
    }

    /// Currently selected function.
    pub fn current(&self) -> Option<&FunctionEntry> {
        self.registry.current()
    }

    /// Mark the screen as needing a redraw.
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Whether a redraw is pending, clearing the flag.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Select the function at `index`.
    ///
    /// A rejected index keeps the previous selection and is reported in the
    /// status line.
    pub fn select(&mut self, index: usize) {
        match self.registry.select(index) {
            Ok(()) => {
                if let Some(entry) = self.registry.current() {
                    self.status = format!("Plotting {}", entry.name);
                }
                self.status_is_error = false;
            }
            Err(e) => {
                tracing::warn!("Rejected selection: {}", e);
                self.status = e.to_string();
                self.status_is_error = true;
                self.invalidate();
            }
        }
    }

    /// Select by the 1-based number shown in the selector.
    pub fn select_number(&mut self, number: u32) {
        if let Some(index) = (number as usize).checked_sub(1) {
            self.select(index);
        }
    }

    /// Expand the selector.
    pub fn open_selector(&mut self) {
        self.selector.open(self.registry.selected_index());
        self.invalidate();
    }

    /// Collapse the selector without changing the selection.
    pub fn cancel_selector(&mut self) {
        self.selector.cancel();
        self.invalidate();
    }

    /// Move the selector highlight up.
    pub fn selector_up(&mut self) {
        self.selector.cursor_up();
        self.invalidate();
    }

    /// Move the selector highlight down.
    pub fn selector_down(&mut self) {
        self.selector.cursor_down(self.registry.len());
        self.invalidate();
    }

    /// Apply the highlighted selector row.
    pub fn confirm_selector(&mut self) {
        if let Some(index) = self.selector.confirm() {
            self.select(index);
        }
        self.invalidate();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
        self.status_is_error = false;
        self.invalidate();
    }

    /// Terminal size changed.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        tracing::debug!("Terminal resized to {}x{}", width, height);
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let app = App::new(Registry::builtin());
        assert!(app.take_redraw());
        app
    }

    #[test]
    fn starts_on_first_function() {
        let app = App::new(Registry::builtin());
        assert_eq!(app.current().map(|e| e.id), Some("sin"));
        assert_eq!(app.status, "Plotting sin(x)");
        assert!(!app.selector.open);
    }

    #[test]
    fn redraw_flag_is_consumed() {
        let app = app();
        assert!(!app.take_redraw());
        app.invalidate();
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn selection_invalidates_through_registry() {
        let mut app = app();
        app.select(1);
        assert!(app.take_redraw());
        assert_eq!(app.current().map(|e| e.id), Some("square"));
        assert_eq!(app.status, "Plotting x^2");
    }

    #[test]
    fn bad_selection_reports_and_keeps_previous() {
        let mut app = app();
        app.select(1);
        app.select(42);
        assert_eq!(app.registry.selected_index(), 1);
        assert!(app.status.contains("out of range"));
        assert!(app.status_is_error);

        app.select(0);
        assert!(!app.status_is_error);
        assert_eq!(app.status, "Plotting sin(x)");
    }

    #[test]
    fn numbers_are_one_based() {
        let mut app = app();
        app.select_number(2);
        assert_eq!(app.registry.selected_index(), 1);
        app.select_number(0);
        assert_eq!(app.registry.selected_index(), 1);
    }

    #[test]
    fn dropdown_flow() {
        let mut app = app();
        app.open_selector();
        assert!(app.selector.open);
        app.selector_down();
        app.selector_down();
        app.confirm_selector();
        assert!(!app.selector.open);
        assert_eq!(app.registry.selected_index(), 2);

        app.open_selector();
        app.selector_up();
        app.cancel_selector();
        assert_eq!(app.registry.selected_index(), 2);
    }

    #[test]
    fn theme_and_resize_invalidate() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert!(app.take_redraw());
        app.handle_resize(80, 24);
        assert!(app.take_redraw());
    }

    #[test]
    fn empty_registry_is_tolerated() {
        let mut app = App::new(Registry::new());
        assert!(app.current().is_none());
        app.open_selector();
        app.confirm_selector();
        assert!(app.status.contains("out of range"));
    }
}
