//! Shared UI components.
//!
//! This module contains shared UI components used across different features:
//! - Theme colors and styling
//! - Layout constants
//! - Value formatters
//! - Status bar and keymap bar widgets

mod formatters;
mod keymap_bar;
mod layout_config;
mod status_bar;
mod theme;

pub use formatters::format_stat_value;
pub use keymap_bar::draw_keymap;
pub use layout_config::LayoutConfig;
pub use status_bar::draw_status;
pub use theme::ThemeColors;
