//! Geometry and color types
//!
//! Coordinates are `f64` throughout: points arrive already in view space
//! and are handed to the host compositor without rescaling.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset the point by a delta
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Same origin and height, width replaced
    pub fn with_width(&self, width: f64) -> Self {
        Rect::new(self.origin.x, self.origin.y, width, self.size.height)
    }

    /// Inset the rect by a delta (shrink from all sides).
    ///
    /// Negative deltas grow the rect.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width - dx * 2.0,
            self.size.height - dy * 2.0,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color and Gradient Types
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Grayscale color with the given white level and alpha
    pub const fn white(white: f32, alpha: f32) -> Self {
        Self::rgba(white, white, white, alpha)
    }

    /// Color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f64,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Linear gradient in unit space of the layer it fills.
///
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: smallvec::SmallVec<[GradientStop; 4]>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point, stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: smallvec::SmallVec<[GradientStop; 4]> = stops.into_iter().collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { start, end, stops }
    }

    /// Stop colors in location order
    pub fn colors(&self) -> Vec<Color> {
        self.stops.iter().map(|s| s.color).collect()
    }

    /// Stop locations, each in `[0, 1]`
    pub fn locations(&self) -> Vec<f64> {
        self.stops.iter().map(|s| s.offset).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inset_negative_grows() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0).inset(-2.0, -2.0);
        assert_eq!(r, Rect::new(-2.0, -2.0, 104.0, 54.0));
    }

    #[test]
    fn test_gradient_stops_sorted_and_clamped() {
        let g = LinearGradient::new(
            Point::new(0.0, 0.5),
            Point::new(1.0, 0.5),
            [
                GradientStop::new(1.5, Color::GREEN),
                GradientStop::new(0.0, Color::RED),
            ],
        );
        assert_eq!(g.locations(), vec![0.0, 1.0]);
        assert_eq!(g.colors(), vec![Color::RED, Color::GREEN]);
    }

    #[test]
    fn test_from_rgb8() {
        let c = Color::from_rgb8(255, 0, 51);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}
