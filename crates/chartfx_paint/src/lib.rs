//! chartfx Paint
//!
//! Turns ordered point sequences into chart paths.
//!
//! # Features
//!
//! - Closed area polygons and open polylines
//! - Pluggable path generation via [`PathGenerator`] (polyline or smoothed spline)
//! - Fluent [`PathBuilder`] for hand-built paths
//! - Gradient presets for line strokes and reveal masks
//!
//! # Example
//!
//! ```rust
//! use chartfx_paint::{build_area_path, build_line_path, Point};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(1.0, 5.0), Point::new(2.0, 2.0)];
//!
//! let area = build_area_path(&points);
//! assert!(area.is_closed());
//! assert_eq!(area.segment_count(), 3);
//!
//! let line = build_line_path(&points, 1.0);
//! assert_eq!(line.segment_count(), 2);
//! ```

pub mod generator;
pub mod gradient;
pub mod path;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from chartfx_core
// ─────────────────────────────────────────────────────────────────────────────

pub use chartfx_core::{
    Color, FillRule, GradientStop, LinearGradient, Path, PathCommand, PathStyle, Point, Rect,
};

// ─────────────────────────────────────────────────────────────────────────────
// chartfx_paint specific exports
// ─────────────────────────────────────────────────────────────────────────────

pub use generator::{PathGenerator, PolylineGenerator, SmoothGenerator};
pub use gradient::{heat_gradient, linear_simple, wipe_mask_gradient};
pub use path::{build_area_path, build_line_path, PathBuilder};
