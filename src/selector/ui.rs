//! Selector UI rendering.

use super::SelectorState;
use crate::registry::Registry;
use crate::shared::{LayoutConfig, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Draw the collapsed selector showing the current function.
pub fn draw_selector(f: &mut Frame<'_>, area: Rect, registry: &Registry, colors: &ThemeColors) {
    let name = registry.current().map(|e| e.name.as_str()).unwrap_or("-");
    let text = format!("▼ {}", name);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .block(
            Block::default()
                .title(" Function ")
                .title_style(Style::default().fg(colors.heading))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );

    f.render_widget(paragraph, area);
}

/// Area of the expanded list, hanging below `anchor` and clipped to `bounds`.
pub fn dropdown_area(
    anchor: Rect,
    bounds: Rect,
    registry: &Registry,
    layout: &LayoutConfig,
) -> Rect {
    let widest = registry
        .names()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0);
    let widest = u16::try_from(widest).unwrap_or(u16::MAX);
    let width = widest
        .saturating_add(layout.selector_padding)
        .max(layout.selector_min_width)
        .min(anchor.width);

    let y = anchor.bottom().saturating_sub(1);
    let wanted = u16::try_from(registry.len()).unwrap_or(u16::MAX).saturating_add(2);
    let height = wanted.min(bounds.bottom().saturating_sub(y));

    Rect::new(anchor.x, y, width, height)
}

/// Draw the expanded list over whatever is below it.
pub fn draw_dropdown(
    f: &mut Frame<'_>,
    area: Rect,
    state: &mut SelectorState,
    registry: &Registry,
    colors: &ThemeColors,
) {
    // Subtract 2 for borders.
    let viewport_height = area.height.saturating_sub(2) as usize;
    state.adjust_scroll(viewport_height);

    let selected = registry.selected_index();
    let items: Vec<ListItem<'_>> = registry
        .names()
        .enumerate()
        .skip(state.scroll)
        .take(viewport_height)
        .map(|(idx, name)| {
            let marker = if idx == selected { "●" } else { " " };
            let text = format!("{} {} {}", marker, idx + 1, name);

            let style = if idx == state.cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.heading))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}
