//! Drawing surface abstraction and the in-memory display list.

use ratatui::style::Color;

use super::Point;

/// A straight line between two screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub stroke: f64,
}

/// A single command issued to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface with a color.
    Clear(Color),
    /// Draw a line segment.
    Line(LineSegment),
}

/// Something the renderer can draw on.
pub trait Surface {
    /// Fill the surface with `color`.
    fn clear(&mut self, color: Color);

    /// Draw one line segment.
    fn draw_line(&mut self, segment: LineSegment);
}

/// Surface that records commands in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Background of the last clear, if any.
    pub fn background(&self) -> Option<Color> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Clear(color) => Some(*color),
            DrawCommand::Line(_) => None,
        })
    }

    /// Recorded line segments.
    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line(segment) => Some(segment),
            DrawCommand::Clear(_) => None,
        })
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, segment: LineSegment) {
        self.commands.push(DrawCommand::Line(segment));
    }
}
