//! Gradient presets for chart overlays

use chartfx_core::{Color, GradientStop, LinearGradient, Point};

/// Create a simple linear gradient between two colors
pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> LinearGradient {
    LinearGradient::new(
        start,
        end,
        [GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
    )
}

/// Horizontal orange → yellow → green gradient used to color line strokes
pub fn heat_gradient() -> LinearGradient {
    LinearGradient::new(
        Point::new(0.0, 0.5),
        Point::new(1.0, 0.5),
        [
            GradientStop::new(0.0, Color::from_rgb8(255, 109, 0)),
            GradientStop::new(0.5, Color::YELLOW),
            GradientStop::new(1.0, Color::from_rgb8(52, 211, 149)),
        ],
    )
}

/// Mask for wipe reveals: opaque on the left fading to clear on the right edge
pub fn wipe_mask_gradient() -> LinearGradient {
    linear_simple(
        Point::new(1.0, 0.0),
        Point::new(0.0, 0.0),
        Color::white(0.0, 0.0),
        Color::white(0.0, 1.0),
    )
}
