//! Timing functions mapping linear time progress to eased progress

/// Compositor timing curve applied to an animation's progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TimingFunction {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInEaseOut,
    /// Custom cubic Bézier with control points `(x1, y1)` and `(x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl TimingFunction {
    /// Control points of the equivalent cubic Bézier curve
    pub fn control_points(&self) -> (f64, f64, f64, f64) {
        match *self {
            TimingFunction::Linear => (0.0, 0.0, 1.0, 1.0),
            TimingFunction::EaseIn => (0.42, 0.0, 1.0, 1.0),
            TimingFunction::EaseOut => (0.0, 0.0, 0.58, 1.0),
            TimingFunction::EaseInEaseOut => (0.42, 0.0, 0.58, 1.0),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => (x1, y1, x2, y2),
        }
    }

    /// Map time progress `t` (clamped to 0..1) to value progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, TimingFunction::Linear) || t == 0.0 || t == 1.0 {
            return t;
        }

        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_curve_x(x1, x2, t);
        bezier(y1, y2, s)
    }
}

/// One coordinate of a cubic Bézier from 0 to 1 with inner controls `a`, `b`
fn bezier(a: f64, b: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
}

fn bezier_derivative(a: f64, b: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
}

/// Find the curve parameter whose x coordinate equals `x`
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    // Newton-Raphson first, bisection if the slope flattens out
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_derivative(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        for t in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(TimingFunction::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_ease_in_out_endpoints_and_midpoint() {
        let ease = TimingFunction::EaseInEaseOut;
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        // Symmetric curve
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-4);
        // Slow start, slow finish
        assert!(ease.apply(0.1) < 0.1);
        assert!(ease.apply(0.9) > 0.9);
    }

    #[test]
    fn test_ease_in_out_monotonic() {
        let ease = TimingFunction::EaseInEaseOut;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_apply_clamps_input() {
        assert_eq!(TimingFunction::EaseIn.apply(-1.0), 0.0);
        assert_eq!(TimingFunction::EaseOut.apply(2.0), 1.0);
    }
}
