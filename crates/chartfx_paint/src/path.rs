//! Path building from chart points
//!
//! [`PathBuilder`] provides a fluent API over [`Path`] that tracks the cursor.
//! [`build_area_path`] and [`build_line_path`] are the two traversals charts use.

pub use chartfx_core::{Path, PathCommand, Point};

/// Builder for constructing paths with fluent API
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.path = self.path.move_to(p.x, p.y);
        self.current = p;
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.path = self.path.line_to(p.x, p.y);
        self.current = p;
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, end: Point) -> Self {
        self.path = self.path.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
        self.current = end;
        self
    }

    /// Move to the first point, then line to each following point
    pub fn polyline(self, points: &[Point]) -> Self {
        match points.split_first() {
            Some((first, rest)) => rest.iter().fold(self.move_to(*first), |b, p| b.line_to(*p)),
            None => self,
        }
    }

    pub fn close(mut self) -> Self {
        self.path = self.path.close();
        self
    }

    pub fn build(self) -> Path {
        self.path
    }

    /// Get the current cursor position
    pub fn current_position(&self) -> Point {
        self.current
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a closed polygon through `points` in input order.
///
/// The result is always marked closed. Zero or one point gives a degenerate
/// path with nothing to fill. Ordering and convexity are not checked;
/// self-intersecting polygons are filled by the style's fill rule.
pub fn build_area_path(points: &[Point]) -> Path {
    tracing::trace!(points = points.len(), "building area path");
    PathBuilder::new().polyline(points).close().build()
}

/// Build an open polyline through `points` in input order.
///
/// `line_width` does not change polyline geometry; it is part of the
/// [`PathGenerator`](crate::PathGenerator) contract for strategies that need it.
pub fn build_line_path(points: &[Point], line_width: f64) -> Path {
    tracing::trace!(points = points.len(), line_width, "building line path");
    PathBuilder::new().polyline(points).build()
}
