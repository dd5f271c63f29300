//! Animatable value types

use chartfx_core::Rect;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Rect {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Rect::new(
            self.x().lerp(&other.x(), t),
            self.y().lerp(&other.y(), t),
            self.width().lerp(&other.width(), t),
            self.height().lerp(&other.height(), t),
        )
    }
}

/// A value carried by an animation descriptor
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatedValue {
    /// Scalar property such as `strokeEnd`
    Scalar(f64),
    /// Rectangle property such as `bounds`
    Rect(Rect),
}

impl AnimatedValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            AnimatedValue::Scalar(v) => Some(*v),
            AnimatedValue::Rect(_) => None,
        }
    }

    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            AnimatedValue::Rect(r) => Some(*r),
            AnimatedValue::Scalar(_) => None,
        }
    }
}

impl Interpolate for AnimatedValue {
    /// Mismatched variants snap to `other` once `t` reaches 1
    fn lerp(&self, other: &Self, t: f64) -> Self {
        match (self, other) {
            (AnimatedValue::Scalar(a), AnimatedValue::Scalar(b)) => {
                AnimatedValue::Scalar(a.lerp(b, t))
            }
            (AnimatedValue::Rect(a), AnimatedValue::Rect(b)) => AnimatedValue::Rect(a.lerp(b, t)),
            _ if t >= 1.0 => *other,
            _ => *self,
        }
    }
}
