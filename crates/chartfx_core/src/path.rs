//! Vector path representation
//!
//! A [`Path`] is an ordered list of drawing commands plus a closed flag.
//! Paths are values: transforming one returns a new path.

use crate::geometry::{Point, Rect};

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// The on-path point this command ends at, if any
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset(dx, dy)),
            PathCommand::LineTo(p) => PathCommand::LineTo(p.offset(dx, dy)),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: control1.offset(dx, dy),
                control2: control2.offset(dx, dy),
                end: end.offset(dx, dy),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A vector path
///
/// A closed path is rendered with an implicit segment from its last point
/// back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    closed: bool,
}

impl Path {
    /// Create a new empty, open path
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a point
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Close the path.
    ///
    /// An empty path is still marked closed but gets no `Close` command.
    pub fn close(mut self) -> Self {
        if !self.commands.is_empty() {
            self.commands.push(PathCommand::Close);
        }
        self.closed = true;
        self
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// On-path vertices in traversal order (control points excluded)
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(PathCommand::end_point)
    }

    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// Number of drawn segments, counting the implicit closing segment of a
    /// non-empty closed path
    pub fn segment_count(&self) -> usize {
        let drawn = self
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::LineTo(_) | PathCommand::CubicTo { .. }))
            .count();
        let closing = self.closed && !self.commands.is_empty();
        drawn + closing as usize
    }

    /// A copy of this path shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            commands: self.commands.iter().map(|c| c.translated(dx, dy)).collect(),
            closed: self.closed,
        }
    }

    /// Calculate the bounding rectangle of this path (control points included)
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        let mut include = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::Close => {}
            }
        }

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_path_counts_implicit_segment() {
        let path = Path::new().move_to(0.0, 0.0).line_to(1.0, 5.0).close();
        assert!(path.is_closed());
        assert_eq!(path.segment_count(), 2);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_empty_closed_path() {
        let path = Path::new().close();
        assert!(path.is_closed());
        assert!(path.is_empty());
        assert_eq!(path.segment_count(), 0);
    }

    #[test]
    fn test_translated_leaves_original() {
        let path = Path::new().move_to(0.0, 0.0).line_to(4.0, 3.0);
        let moved = path.translated(2.0, 2.0);

        assert_eq!(path.points().next(), Some(Point::ZERO));
        let points: Vec<_> = moved.points().collect();
        assert_eq!(points, vec![Point::new(2.0, 2.0), Point::new(6.0, 5.0)]);
    }

    #[test]
    fn test_bounds() {
        let path = Path::new()
            .move_to(-1.0, 2.0)
            .cubic_to(0.0, 10.0, 3.0, -4.0, 5.0, 1.0);
        assert_eq!(path.bounds(), Rect::new(-1.0, -4.0, 6.0, 14.0));
    }
}
