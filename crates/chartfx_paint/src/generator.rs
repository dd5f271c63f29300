//! Pluggable path generation for line charts
//!
//! A line chart asks a [`PathGenerator`] to turn its points into a path.
//! [`PolylineGenerator`] draws straight segments; [`SmoothGenerator`] draws a
//! Catmull-Rom spline through the same points.

use chartfx_core::{Path, Point};

use crate::path::{build_line_path, PathBuilder};

/// Strategy for turning chart points into an open line path
pub trait PathGenerator {
    fn generate(&self, points: &[Point], line_width: f64) -> Path;
}

/// Straight segments between consecutive points
#[derive(Clone, Copy, Debug, Default)]
pub struct PolylineGenerator;

impl PathGenerator for PolylineGenerator {
    fn generate(&self, points: &[Point], line_width: f64) -> Path {
        build_line_path(points, line_width)
    }
}

/// Catmull-Rom spline through every point, emitted as cubic Bézier segments
#[derive(Clone, Copy, Debug)]
pub struct SmoothGenerator {
    tension: f64,
}

impl SmoothGenerator {
    /// Create a generator with the given tension, clamped to `[0, 1]`.
    ///
    /// `0` degenerates to straight segments, `0.5` is the classic
    /// Catmull-Rom curve.
    pub fn new(tension: f64) -> Self {
        Self {
            tension: if tension.is_finite() {
                tension.clamp(0.0, 1.0)
            } else {
                0.5
            },
        }
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }
}

impl Default for SmoothGenerator {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl PathGenerator for SmoothGenerator {
    fn generate(&self, points: &[Point], line_width: f64) -> Path {
        if points.len() < 3 {
            return build_line_path(points, line_width);
        }

        tracing::trace!(
            points = points.len(),
            tension = self.tension,
            "building smoothed line path"
        );

        let k = self.tension / 3.0;
        let last = points.len() - 1;
        let mut builder = PathBuilder::new().move_to(points[0]);

        for i in 0..last {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];

            let c1 = Point::new(p1.x + (p2.x - p0.x) * k, p1.y + (p2.y - p0.y) * k);
            let c2 = Point::new(p2.x - (p3.x - p1.x) * k, p2.y - (p3.y - p1.y) * k);
            builder = builder.cubic_to(c1, c2, p2);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartfx_core::PathCommand;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 4.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 3.0),
        ]
    }

    #[test]
    fn test_generators_are_interchangeable() {
        let generators: Vec<Box<dyn PathGenerator>> =
            vec![Box::new(PolylineGenerator), Box::new(SmoothGenerator::default())];

        for generator in generators {
            let path = generator.generate(&zigzag(), 1.0);
            assert!(!path.is_closed());
            assert_eq!(path.segment_count(), 3);
        }
    }

    #[test]
    fn test_smooth_path_passes_through_points() {
        let path = SmoothGenerator::default().generate(&zigzag(), 1.0);
        assert_eq!(path.points().collect::<Vec<_>>(), zigzag());
        assert!(path
            .commands()
            .iter()
            .skip(1)
            .all(|c| matches!(c, PathCommand::CubicTo { .. })));
    }

    #[test]
    fn test_zero_tension_controls_sit_on_endpoints() {
        let path = SmoothGenerator::new(0.0).generate(&zigzag(), 1.0);
        match &path.commands()[1] {
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                assert_eq!(*control1, Point::new(0.0, 0.0));
                assert_eq!(*control2, *end);
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }

    #[test]
    fn test_short_inputs_fall_back_to_polyline() {
        let two = [Point::ZERO, Point::new(1.0, 1.0)];
        let path = SmoothGenerator::default().generate(&two, 1.0);
        assert_eq!(path.commands()[1], PathCommand::LineTo(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_tension_clamped() {
        assert_eq!(SmoothGenerator::new(4.0).tension(), 1.0);
        assert_eq!(SmoothGenerator::new(f64::NAN).tension(), 0.5);
    }
}
