//! chartfx Core Types
//!
//! Value types shared by the chartfx crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in view coordinates
//! - **Colors and gradients**: `Color`, `GradientStop`, `LinearGradient`
//! - **Paths**: ordered `PathCommand`s with an explicit closed flag
//! - **Styles**: stroke/fill configuration including dash patterns and fill rule
//! - **Errors**: the `ChartError` taxonomy used across the workspace
//!
//! # Example
//!
//! ```rust
//! use chartfx_core::{Path, PathStyle, Color};
//!
//! let path = Path::new().move_to(0.0, 0.0).line_to(10.0, 4.0).close();
//! assert_eq!(path.segment_count(), 2);
//!
//! let style = PathStyle::area(Color::BLUE);
//! assert_eq!(style.line_width, 2.0);
//! ```

pub mod error;
pub mod geometry;
pub mod path;
pub mod style;

pub use error::{ChartError, Result};
pub use geometry::{Color, GradientStop, LinearGradient, Point, Rect, Size};
pub use path::{Path, PathCommand};
pub use style::{DashPattern, FillRule, LineCap, LineJoin, PathStyle};
