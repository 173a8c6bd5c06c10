//! Sampling and auto-scaling of a function onto a pixel surface.

use super::PlotConfig;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ViewportSize {
    /// Create a viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to draw on.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A point in screen space, origin top-left, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
}

/// One function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Input value.
    pub x: f64,
    /// Output value, possibly non-finite.
    pub y: f64,
}

impl Sample {
    /// Whether the output can be plotted.
    pub fn is_valid(&self) -> bool {
        self.y.is_finite()
    }
}

/// Function-space bounds and the scale factors onto the surface.
///
/// `y_min` and `y_max` are already padded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    /// Left edge of the domain.
    pub x_min: f64,
    /// Right edge of the domain.
    pub x_max: f64,
    /// Bottom of the padded value range.
    pub y_min: f64,
    /// Top of the padded value range.
    pub y_max: f64,
    /// Pixels per unit along x.
    pub x_scale: f64,
    /// Pixels per unit along y.
    pub y_scale: f64,
}

impl PlotRange {
    /// Map a function-space point to screen coordinates.
    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point {
            x: (x - self.x_min) * self.x_scale,
            y: (self.y_max - y) * self.y_scale,
        }
    }

    /// Screen column of `x = 0` and screen row of `y = 0`.
    pub fn axis_offsets(&self) -> (f64, f64) {
        let x_offset = -self.x_min * self.x_scale;
        let y_offset = self.y_max * self.y_scale;
        (x_offset, y_offset)
    }
}

/// Evaluate `f` once per pixel column across the configured domain.
pub fn sample<F>(f: F, size: ViewportSize, config: &PlotConfig) -> Vec<Sample>
where
    F: Fn(f64) -> f64,
{
    if size.width == 0 {
        return Vec::new();
    }

    let step = config.domain_width() / f64::from(size.width);
    (0..size.width)
        .map(|i| {
            let x = config.x_min + f64::from(i) * step;
            Sample { x, y: f(x) }
        })
        .collect()
}

/// Compute padded bounds and scale factors for `samples`.
///
/// Returns `None` for a degenerate surface, when no sample is finite, or
/// when the padded range does not fit in an `f64`.
pub fn compute_range(
    samples: &[Sample],
    size: ViewportSize,
    config: &PlotConfig,
) -> Option<PlotRange> {
    if size.is_degenerate() {
        return None;
    }

    let (mut y_min, mut y_max) = samples
        .iter()
        .filter(|s| s.is_valid())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), s| {
            (min.min(s.y), max.max(s.y))
        });
    if y_min > y_max {
        return None;
    }

    let mut y_range = y_max - y_min;
    if y_range <= 0.0 {
        // Constant function: centre a fixed span on the value.
        y_range = config.min_y_range;
        y_min -= y_range / 2.0;
        y_max += y_range / 2.0;
    }

    y_min -= y_range * config.bottom_padding;
    y_max += y_range * config.top_padding;

    // Values spanning more than f64::MAX cannot be mapped onto pixels.
    let y_scale = f64::from(size.height) / (y_max - y_min);
    if !(y_min.is_finite() && y_max.is_finite() && y_scale.is_finite() && y_scale > 0.0) {
        tracing::warn!("Value range [{}, {}] too wide to scale", y_min, y_max);
        return None;
    }

    Some(PlotRange {
        x_min: config.x_min,
        x_max: config.x_max,
        y_min,
        y_max,
        x_scale: f64::from(size.width) / config.domain_width(),
        y_scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlotConfig {
        PlotConfig::default()
    }

    #[test]
    fn one_sample_per_column() {
        let samples = sample(|x| x, ViewportSize::new(4, 10), &config());
        let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![-10.0, -5.0, 0.0, 5.0]);
    }

    #[test]
    fn zero_width_has_no_samples() {
        assert!(sample(f64::sin, ViewportSize::new(0, 10), &config()).is_empty());
    }

    #[test]
    fn padding_is_asymmetric() {
        let samples = [Sample { x: 0.0, y: 0.0 }, Sample { x: 1.0, y: 100.0 }];
        let range = compute_range(&samples, ViewportSize::new(200, 100), &config()).unwrap();
        assert!((range.y_min - -0.1).abs() < 1e-9);
        assert!((range.y_max - 105.0).abs() < 1e-9);
        assert!((range.x_scale - 10.0).abs() < 1e-9);
        assert!((range.y_scale - 100.0 / 105.1).abs() < 1e-9);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let samples = [
            Sample { x: 0.0, y: f64::NAN },
            Sample { x: 1.0, y: -2.0 },
            Sample { x: 2.0, y: f64::INFINITY },
            Sample { x: 3.0, y: 2.0 },
        ];
        let range = compute_range(&samples, ViewportSize::new(10, 10), &config()).unwrap();
        assert!(range.y_min < -2.0 && range.y_min > -2.01);
        assert!(range.y_max > 2.0 && range.y_max < 2.3);
    }

    #[test]
    fn all_invalid_gives_no_range() {
        let samples = [Sample { x: 0.0, y: f64::NAN }];
        assert!(compute_range(&samples, ViewportSize::new(10, 10), &config()).is_none());
    }

    #[test]
    fn constant_function_gets_minimum_span() {
        let samples = sample(|_| 3.0, ViewportSize::new(50, 40), &config());
        let range = compute_range(&samples, ViewportSize::new(50, 40), &config()).unwrap();
        assert!(range.y_min < 3.0 && range.y_max > 3.0);
        assert!(range.y_scale.is_finite());
        assert!((range.y_max - range.y_min - 1.051).abs() < 1e-9);
    }

    #[test]
    fn overflowing_span_gives_no_range() {
        let samples = [Sample { x: -1.0, y: -1e308 }, Sample { x: 1.0, y: 1e308 }];
        assert!(compute_range(&samples, ViewportSize::new(10, 10), &config()).is_none());
    }

    #[test]
    fn padding_overflow_gives_no_range() {
        // The span is finite but the 5% top padding pushes y_max past f64::MAX.
        let samples = [Sample { x: 0.0, y: 0.0 }, Sample { x: 1.0, y: f64::MAX }];
        assert!(compute_range(&samples, ViewportSize::new(10, 10), &config()).is_none());
    }

    #[test]
    fn degenerate_surface_gives_no_range() {
        let samples = [Sample { x: 0.0, y: 1.0 }, Sample { x: 1.0, y: 2.0 }];
        assert!(compute_range(&samples, ViewportSize::new(0, 0), &config()).is_none());
        assert!(compute_range(&samples, ViewportSize::new(10, 0), &config()).is_none());
    }

    #[test]
    fn vertical_axis_sits_mid_width_for_symmetric_domain() {
        let samples = [Sample { x: 0.0, y: -1.0 }, Sample { x: 1.0, y: 1.0 }];
        let size = ViewportSize::new(400, 300);
        let range = compute_range(&samples, size, &config()).unwrap();
        let (x_offset, y_offset) = range.axis_offsets();
        assert!((x_offset - 200.0).abs() < 1e-9);
        assert!((y_offset - range.to_screen(0.0, 0.0).y).abs() < 1e-9);
    }

    #[test]
    fn screen_mapping_hits_corners() {
        let samples = [Sample { x: 0.0, y: 0.0 }, Sample { x: 1.0, y: 10.0 }];
        let size = ViewportSize::new(100, 50);
        let range = compute_range(&samples, size, &config()).unwrap();

        let top_left = range.to_screen(range.x_min, range.y_max);
        assert_eq!(top_left, Point { x: 0.0, y: 0.0 });

        let bottom_right = range.to_screen(range.x_max, range.y_min);
        assert!((bottom_right.x - 100.0).abs() < 1e-9);
        assert!((bottom_right.y - 50.0).abs() < 1e-9);
    }
}
