use std::f64::consts::TAU;

use super::TimelineConfig;

/// Drawing surface size, in abstract units with a square aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Which axis the timeline runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Horizontal iff the viewport is wider than it is tall.
    pub fn of(viewport: Viewport) -> Self {
        if viewport.width > viewport.height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// The sine-wave spine of the timeline.
///
/// The primary axis runs linearly from `padding` to `extent - padding`; the
/// secondary coordinate oscillates around the midpoint of the other axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    orientation: Orientation,
    start: f64,
    length: f64,
    midpoint: f64,
    amplitude: f64,
    period: f64,
}

impl Curve {
    pub fn new(viewport: Viewport, config: &TimelineConfig) -> Self {
        let orientation = Orientation::of(viewport);
        let (primary, secondary) = match orientation {
            Orientation::Horizontal => (viewport.width, viewport.height),
            Orientation::Vertical => (viewport.height, viewport.width),
        };

        let padding = primary * config.padding_percent / 100.0;
        let length = primary - 2.0 * padding;

        Self {
            orientation,
            start: padding,
            length,
            midpoint: secondary / 2.0,
            amplitude: secondary * config.amplitude_percent / 100.0,
            period: length / config.period_multiplier / TAU,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinate at a fractional distance along the primary axis.
    pub fn point_at(&self, fraction: f64) -> Point {
        let primary = self.start + self.length * fraction;
        // Zero-length curves (tiny viewports) collapse to a flat line.
        let phase = if self.period > 0.0 {
            (primary - self.start) / self.period
        } else {
            0.0
        };
        let secondary = self.midpoint + self.amplitude * phase.sin();

        match self.orientation {
            Orientation::Horizontal => Point {
                x: primary,
                y: secondary,
            },
            Orientation::Vertical => Point {
                x: secondary,
                y: primary,
            },
        }
    }

    /// `segments + 1` evenly spaced samples of the whole curve.
    pub fn samples(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// Coordinates for fractional event positions.
    pub fn place(&self, positions: &[f64]) -> Vec<Point> {
        positions.iter().map(|&p| self.point_at(p)).collect()
    }

    /// The curve from its start up to `upto`, at roughly one sample per
    /// percent and never fewer than three points.
    pub fn sub_path(&self, upto: f64) -> Vec<Point> {
        let count = ((upto * 100.0).floor() as usize).max(2);
        (0..=count)
            .map(|i| self.point_at(i as f64 / count as f64 * upto))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn wide() -> Curve {
        Curve::new(
            Viewport {
                width: 1000.0,
                height: 500.0,
            },
            &TimelineConfig::default(),
        )
    }

    #[test]
    fn orientation_follows_aspect() {
        let square = Viewport {
            width: 10.0,
            height: 10.0,
        };
        assert_eq!(Orientation::of(square), Orientation::Vertical);
        let wide = Viewport {
            width: 11.0,
            height: 10.0,
        };
        assert_eq!(Orientation::of(wide), Orientation::Horizontal);
    }

    #[test]
    fn horizontal_curve_spans_padded_width() {
        let curve = wide();
        let start = curve.point_at(0.0);
        let end = curve.point_at(1.0);
        assert!((start.x - 100.0).abs() < EPS);
        assert!((end.x - 900.0).abs() < EPS);
        assert!((start.y - 250.0).abs() < EPS);
        assert!((end.y - 250.0).abs() < 1e-6);
    }

    #[test]
    fn quarter_period_hits_full_amplitude() {
        let peak = wide().point_at(0.25);
        // 17% of a 500-unit secondary extent
        assert!((peak.y - (250.0 + 85.0)).abs() < 1e-6);
    }

    #[test]
    fn vertical_curve_runs_down_the_height() {
        let curve = Curve::new(
            Viewport {
                width: 400.0,
                height: 800.0,
            },
            &TimelineConfig::default(),
        );
        assert_eq!(curve.orientation(), Orientation::Vertical);
        let start = curve.point_at(0.0);
        assert!((start.y - 80.0).abs() < EPS);
        assert!((start.x - 200.0).abs() < EPS);
        let peak = curve.point_at(0.25);
        assert!((peak.x - (200.0 + 68.0)).abs() < 1e-6);
    }

    #[test]
    fn samples_include_both_ends() {
        let points = wide().samples(100);
        assert_eq!(points.len(), 101);
        assert!((points[0].x - 100.0).abs() < EPS);
        assert!((points[100].x - 900.0).abs() < EPS);
    }

    #[test]
    fn sub_path_ends_at_requested_fraction() {
        let curve = wide();
        let partial = curve.sub_path(0.5);
        assert_eq!(partial.len(), 51);
        assert_eq!(*partial.last().unwrap(), curve.point_at(0.5));

        let stub = curve.sub_path(0.01);
        assert_eq!(stub.len(), 3);
    }

    #[test]
    fn degenerate_viewport_stays_finite() {
        let curve = Curve::new(
            Viewport {
                width: 0.0,
                height: 0.0,
            },
            &TimelineConfig::default(),
        );
        let p = curve.point_at(0.5);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
