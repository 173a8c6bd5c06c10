//! Layout configuration constants for the screen.

/// Sizes used when laying out the selector and the plot canvas.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Height of the closed selector including borders.
    pub selector_height: u16,
    /// Horizontal padding added around names in the open selector.
    pub selector_padding: u16,
    /// Minimum width of the open selector.
    pub selector_min_width: u16,
    /// Braille dots per terminal cell horizontally.
    pub dots_per_cell_x: u32,
    /// Braille dots per terminal cell vertically.
    pub dots_per_cell_y: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            selector_height: 3,
            selector_padding: 6,
            selector_min_width: 20,
            dots_per_cell_x: 2,
            dots_per_cell_y: 4,
        }
    }
}
