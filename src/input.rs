//! Keyboard handling.

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Apply a key press to the application.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    // Selector open - handle separately
    if app.selector.open {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.selector_up();
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.selector_down();
            }
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                app.confirm_selector();
            }
            (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                app.cancel_selector();
            }
            _ => {}
        }
        return Flow::Continue;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return Flow::Quit;
        }
        (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            app.open_selector();
        }
        (KeyModifiers::NONE, KeyCode::Char(c)) if c.is_ascii_digit() => {
            if let Some(n) = c.to_digit(10) {
                app.select_number(n);
            }
        }
        (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('T')) => {
            app.cycle_theme();
        }
        _ => {}
    }
    Flow::Continue
}
