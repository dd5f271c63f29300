//! chartfx Animation
//!
//! Declarative reveal animations for chart paths. Nothing in this crate runs
//! a clock: every operation is a pure function returning a descriptor that
//! the host compositor plays once, without reversing, holding the final value.
//!
//! # Features
//!
//! - **Stroke reveals** for line paths (`strokeEnd` 0 → 1, ease-in-ease-out)
//! - **Mask wipes** for filled areas (mask width 0 → content width + overshoot, linear)
//! - **Timing functions**: linear, ease curves and custom cubic Béziers
//! - **Descriptor sampling** to compute the shown value at any clock time
//!
//! # Example
//!
//! ```rust
//! use chartfx_animation::{RevealAnimator, RevealSpec};
//! use chartfx_core::Path;
//!
//! let path = Path::new().move_to(0.0, 0.0).line_to(1.0, 5.0).line_to(2.0, 2.0);
//! let reveal = RevealAnimator::new()
//!     .stroke_reveal(&path, &RevealSpec::stroke(1.0, 0.5), 10.0)
//!     .unwrap();
//!
//! let anim = reveal.descriptor().unwrap();
//! assert_eq!(anim.begin_time, 10.5);
//! assert_eq!(anim.end_time(), 11.5);
//! ```

pub mod clock;
pub mod descriptor;
pub mod easing;
pub mod reveal;
pub mod values;

pub use clock::{FixedClock, MediaClock, MonotonicClock};
pub use descriptor::{AnimationDescriptor, FillMode};
pub use easing::TimingFunction;
pub use reveal::{
    Reveal, RevealAnimator, RevealKind, RevealSpec, MASK_BOUNDS_KEY_PATH, MASK_OVERSHOOT,
    STROKE_END_KEY_PATH,
};
pub use values::{AnimatedValue, Interpolate};
