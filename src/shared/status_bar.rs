//! Status bar UI component.

use super::{format_stat_value, ThemeColors};
use crate::plot::PlotRange;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar. Errors are shown in the theme's error color.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    is_error: bool,
    range: Option<&PlotRange>,
    colors: &ThemeColors,
) {
    let text = match range {
        Some(r) => format!(
            "{} | x: [{}, {}] y: [{}, {}]",
            status,
            format_stat_value(r.x_min),
            format_stat_value(r.x_max),
            format_stat_value(r.y_min),
            format_stat_value(r.y_max)
        ),
        None => status.to_string(),
    };

    let fg = if is_error { colors.error } else { colors.status_fg };
    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
