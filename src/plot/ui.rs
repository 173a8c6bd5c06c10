//! Plot canvas rendering on the terminal.
//!
//! The terminal canvas is addressed in Braille dots, so the viewport handed
//! to the renderer is the inner area measured in dots rather than cells.

use super::{render, DisplayList, DrawCommand, PlotConfig, PlotRange, ViewportSize};
use crate::registry::FunctionEntry;
use crate::shared::{LayoutConfig, ThemeColors};
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line},
        Block, Borders,
    },
    Frame,
};

/// Viewport in Braille dots for a cell area.
pub fn viewport_for(area: Rect, layout: &LayoutConfig) -> ViewportSize {
    ViewportSize::new(
        u32::from(area.width) * layout.dots_per_cell_x,
        u32::from(area.height) * layout.dots_per_cell_y,
    )
}

/// Draw the plot of `entry` into `area`, returning the range used.
pub fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    entry: Option<&FunctionEntry>,
    config: &PlotConfig,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) -> Option<PlotRange> {
    let title = entry
        .map(|e| format!(" {} ", e.name))
        .unwrap_or_else(|| " No function ".to_string());
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    let size = viewport_for(inner, layout);

    let mut list = DisplayList::new();
    let palette = colors.palette();
    let range = entry.and_then(|e| render(&mut list, |x| e.evaluate(x), size, config, &palette));

    if let Some(r) = range {
        tracing::debug!(
            "Redraw {}x{} dots: y in [{}, {}]",
            size.width,
            size.height,
            r.y_min,
            r.y_max
        );
    }

    // Canvas y grows upwards, screen y grows downwards.
    let height = f64::from(size.height);
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(list.background().unwrap_or(colors.bg))
        .x_bounds([0.0, f64::from(size.width)])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for cmd in list.commands() {
                if let DrawCommand::Line(seg) = cmd {
                    ctx.draw(&Line::new(
                        seg.from.x,
                        height - seg.from.y,
                        seg.to.x,
                        height - seg.to.y,
                        seg.color,
                    ));
                }
            }
        });

    f.render_widget(canvas, area);
    range
}
