//! User interface rendering.

use crate::app::App;
use crate::plot::ui::draw_plot;
use crate::selector::ui::{draw_dropdown, draw_selector, dropdown_area};
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Selector on top, plot, then status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.layout.selector_height),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_selector(f, chunks[0], &app.registry, &colors);

    app.last_range = draw_plot(
        f,
        chunks[1],
        app.registry.current(),
        &app.plot_config,
        &app.layout,
        &colors,
    );

    draw_status(
        f,
        chunks[2],
        &app.status,
        app.status_is_error,
        app.last_range.as_ref(),
        &colors,
    );
    draw_keymap(f, chunks[3], app.selector.open, &colors);

    // Drop-down list overlays the plot
    if app.selector.open {
        let area = dropdown_area(chunks[0], f.area(), &app.registry, &app.layout);
        draw_dropdown(f, area, &mut app.selector, &app.registry, &colors);
    }
}
