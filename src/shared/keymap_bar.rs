//! Keymap help bar UI component.

use super::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, selector_open: bool, colors: &ThemeColors) {
    let keymap_text = if selector_open {
        "jk/↑↓:nav | Enter:select | Esc:cancel"
    } else {
        "q:quit | Enter/Space:choose function | 1-9:select | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
