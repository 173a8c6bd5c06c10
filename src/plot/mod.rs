//! Plot renderer - fits a function into a pixel surface and draws it.
//!
//! Rendering is a pure function of the evaluator, the surface size, a
//! [`PlotConfig`] and a [`Palette`]. The result is a sequence of commands on a
//! [`Surface`]: a clear, the two axes, then the polyline approximation of the
//! graph. Samples whose value is not finite break the polyline.

mod scale;
mod surface;
pub mod ui;

use ratatui::style::Color;

pub use scale::{compute_range, sample, PlotRange, Point, Sample, ViewportSize};
pub use surface::{DisplayList, DrawCommand, LineSegment, Surface};

/// Renderer constants.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Left edge of the sampled domain.
    pub x_min: f64,
    /// Right edge of the sampled domain.
    pub x_max: f64,
    /// Fraction of the value range added below the minimum.
    pub bottom_padding: f64,
    /// Fraction of the value range added above the maximum.
    pub top_padding: f64,
    /// Span substituted for a zero value range.
    pub min_y_range: f64,
    /// Stroke width of the axes.
    pub axis_stroke: f64,
    /// Stroke width of the graph.
    pub curve_stroke: f64,
}

impl PlotConfig {
    /// Width of the sampled domain.
    pub fn domain_width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            bottom_padding: 0.001,
            top_padding: 0.05,
            min_y_range: 1.0,
            axis_stroke: 2.0,
            curve_stroke: 2.0,
        }
    }
}

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Clear color.
    pub background: Color,
    /// Axis color.
    pub axis: Color,
    /// Graph color.
    pub curve: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::White,
            axis: Color::Black,
            curve: Color::Blue,
        }
    }
}

/// Draw `f` onto `surface`.
///
/// A degenerate surface receives no commands at all. When no sample is
/// finite, or the values are too far apart to scale, the surface is only
/// cleared. The polyline is built from the samples taken for scaling, so `f`
/// is evaluated once per column. Returns the range used for scaling.
pub fn render<S, F>(
    surface: &mut S,
    f: F,
    size: ViewportSize,
    config: &PlotConfig,
    palette: &Palette,
) -> Option<PlotRange>
where
    S: Surface + ?Sized,
    F: Fn(f64) -> f64,
{
    if size.is_degenerate() {
        tracing::debug!("Skipping draw on {}x{} surface", size.width, size.height);
        return None;
    }

    surface.clear(palette.background);

    let samples = sample(&f, size, config);
    let range = compute_range(&samples, size, config)?;

    let width = f64::from(size.width);
    let height = f64::from(size.height);
    let (x_offset, y_offset) = range.axis_offsets();

    let axis = |from: Point, to: Point| LineSegment {
        from,
        to,
        color: palette.axis,
        stroke: config.axis_stroke,
    };
    surface.draw_line(axis(
        Point { x: 0.0, y: y_offset },
        Point { x: width, y: y_offset },
    ));
    surface.draw_line(axis(
        Point { x: x_offset, y: 0.0 },
        Point { x: x_offset, y: height },
    ));

    let mut prev: Option<Point> = None;
    for s in &samples {
        if !s.is_valid() {
            prev = None;
            continue;
        }

        let point = range.to_screen(s.x, s.y);
        if let Some(from) = prev {
            surface.draw_line(LineSegment {
                from,
                to: point,
                color: palette.curve,
                stroke: config.curve_stroke,
            });
        }
        prev = Some(point);
    }

    Some(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw<F: Fn(f64) -> f64>(f: F, width: u32, height: u32) -> (DisplayList, Option<PlotRange>) {
        let mut list = DisplayList::new();
        let range = render(
            &mut list,
            f,
            ViewportSize::new(width, height),
            &PlotConfig::default(),
            &Palette::default(),
        );
        (list, range)
    }

    fn curve_segments(list: &DisplayList) -> usize {
        list.lines().filter(|l| l.color == Color::Blue).count()
    }

    #[test]
    fn clear_comes_first_then_axes() {
        let (list, _) = draw(f64::sin, 40, 30);
        let cmds = list.commands();
        assert_eq!(cmds[0], DrawCommand::Clear(Color::White));

        let axes: Vec<_> = cmds[1..3]
            .iter()
            .map(|c| match c {
                DrawCommand::Line(l) => *l,
                DrawCommand::Clear(_) => panic!("unexpected clear"),
            })
            .collect();
        assert!(axes.iter().all(|l| l.color == Color::Black && l.stroke == 2.0));
        assert_eq!(axes[0].from.y, axes[0].to.y);
        assert_eq!((axes[0].from.x, axes[0].to.x), (0.0, 40.0));
        assert_eq!(axes[1].from.x, axes[1].to.x);
        assert_eq!((axes[1].from.y, axes[1].to.y), (0.0, 30.0));
    }

    #[test]
    fn continuous_function_gives_width_minus_one_segments() {
        let (list, _) = draw(|x| x * x, 120, 80);
        assert_eq!(curve_segments(&list), 119);
        assert_eq!(list.commands().len(), 1 + 2 + 119);
    }

    #[test]
    fn pole_breaks_polyline() {
        // Samples at -10, -5, 0, 5; 1/0 is infinite.
        let (list, _) = draw(|x| 1.0 / x, 4, 10);
        assert_eq!(curve_segments(&list), 1);
    }

    #[test]
    fn nan_samples_are_not_connected() {
        // sqrt is NaN for -10 and -5, leaving 0 -> 5.
        let (list, range) = draw(f64::sqrt, 4, 10);
        assert_eq!(curve_segments(&list), 1);
        let seg = list.lines().find(|l| l.color == Color::Blue).unwrap();
        let range = range.unwrap();
        assert_eq!(seg.from, range.to_screen(0.0, 0.0));
    }

    #[test]
    fn nowhere_finite_only_clears() {
        let (list, range) = draw(|_| f64::NAN, 50, 50);
        assert!(range.is_none());
        assert_eq!(list.commands(), &[DrawCommand::Clear(Color::White)]);
    }

    #[test]
    fn unscalable_values_only_clear() {
        let (list, range) = draw(|x| if x < 0.0 { -1e308 } else { 1e308 }, 10, 10);
        assert!(range.is_none());
        assert_eq!(list.commands(), &[DrawCommand::Clear(Color::White)]);
    }

    #[test]
    fn every_emitted_point_is_finite() {
        let fns: [fn(f64) -> f64; 5] = [f64::sin, f64::sqrt, f64::exp, |x| 1.0 / x, |x| x * 1e300];
        for f in fns {
            let (list, _) = draw(f, 64, 48);
            for seg in list.lines() {
                for p in [seg.from, seg.to] {
                    assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", seg);
                }
            }
        }
    }

    #[test]
    fn degenerate_surface_emits_nothing() {
        for (w, h) in [(0, 0), (0, 10), (10, 0)] {
            let (list, range) = draw(f64::sin, w, h);
            assert!(list.is_empty());
            assert!(range.is_none());
        }
    }

    #[test]
    fn single_column_draws_axes_only() {
        let (list, range) = draw(f64::cos, 1, 10);
        assert!(range.is_some());
        assert_eq!(curve_segments(&list), 0);
        assert_eq!(list.lines().count(), 2);
    }

    #[test]
    fn custom_palette_is_used() {
        let palette = Palette {
            background: Color::Rgb(1, 2, 3),
            axis: Color::Red,
            curve: Color::Green,
        };
        let mut list = DisplayList::new();
        render(
            &mut list,
            f64::sin,
            ViewportSize::new(10, 10),
            &PlotConfig::default(),
            &palette,
        );
        assert_eq!(list.background(), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(list.lines().filter(|l| l.color == Color::Red).count(), 2);
        assert_eq!(list.lines().filter(|l| l.color == Color::Green).count(), 9);
    }
}
