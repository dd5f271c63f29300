//! chartfx Overlays
//!
//! Animated line and filled-area chart layers for a host compositor.
//!
//! The host implements [`OverlayHost`] (plus [`ShapeLayer`] and
//! [`GradientLayer`] for its layer handles). Overlays build the path,
//! configure fresh layers and attach a one-shot reveal descriptor; the host
//! compositor plays it. [`RecordingHost`] is a host that simply records
//! every call.
//!
//! # Example
//!
//! ```rust
//! use chartfx_animation::{FixedClock, RevealSpec};
//! use chartfx_core::{Color, Point, Rect};
//! use chartfx_overlay::{AreaOverlay, RecordingHost};
//!
//! let mut host = RecordingHost::new(Rect::new(0.0, 0.0, 320.0, 200.0));
//! let points = [Point::new(0.0, 200.0), Point::new(160.0, 40.0), Point::new(320.0, 200.0)];
//!
//! AreaOverlay::default()
//!     .show(&mut host, &points, Color::BLUE, &RevealSpec::wipe(1.0, 0.0), &FixedClock(0.0))
//!     .unwrap();
//!
//! assert_eq!(host.sublayers().len(), 1);
//! assert!(host.mask().is_some());
//! ```

pub mod area;
pub mod config;
pub mod host;
pub mod line;
pub mod mask;
pub mod recording;

pub use area::AreaOverlay;
pub use config::OverlayConfig;
pub use host::{GradientLayer, GradientLayerExt, OverlayHost, ShapeLayer, ShapeLayerExt};
pub use line::{LineOverlay, STROKE_ANIMATION_KEY};
pub use mask::WIPE_ANIMATION_KEY;
pub use recording::{LayerCommand, RecordingHost, RecordingLayer};
