//! Declarative animation descriptors
//!
//! A descriptor tells the host compositor what to animate and when. It is a
//! plain value: playing it is entirely the host's job. [`AnimationDescriptor::value_at`]
//! reproduces what the compositor shows at a given clock time, for hosts that
//! drive their own interpolation and for tests.

use crate::easing::TimingFunction;
use crate::values::{AnimatedValue, Interpolate};

/// What the layer shows once the animation has finished
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    /// Persist the final value after completion
    #[default]
    Forwards,
    /// Drop back to the starting value after completion
    Removed,
}

impl FillMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Forwards => "persist-final-value",
            FillMode::Removed => "removed",
        }
    }
}

/// A one-shot property animation handed to the host compositor
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    /// Animated layer property (`strokeEnd`, `bounds`)
    pub key_path: &'static str,
    pub from_value: AnimatedValue,
    pub to_value: AnimatedValue,
    /// Duration in seconds
    pub duration: f64,
    /// Absolute compositor clock time at which the animation starts
    pub begin_time: f64,
    pub timing: TimingFunction,
    pub fill_mode: FillMode,
    pub removed_on_completion: bool,
    pub autoreverses: bool,
    pub repeat_count: u32,
}

impl AnimationDescriptor {
    /// One-shot, non-reversing descriptor that persists at `to`
    pub fn one_shot(
        key_path: &'static str,
        from: AnimatedValue,
        to: AnimatedValue,
        duration: f64,
        begin_time: f64,
        timing: TimingFunction,
    ) -> Self {
        Self {
            key_path,
            from_value: from,
            to_value: to,
            duration,
            begin_time,
            timing,
            fill_mode: FillMode::Forwards,
            removed_on_completion: false,
            autoreverses: false,
            repeat_count: 1,
        }
    }

    /// Clock time at which the final value is reached
    pub fn end_time(&self) -> f64 {
        self.begin_time + self.duration
    }

    /// Linear time progress at clock time `t`, in `[0, 1]`
    pub fn progress_at(&self, t: f64) -> f64 {
        if t <= self.begin_time {
            return 0.0;
        }
        if self.duration <= 0.0 || t >= self.end_time() {
            return 1.0;
        }
        (t - self.begin_time) / self.duration
    }

    /// Value shown at clock time `t`
    pub fn value_at(&self, t: f64) -> AnimatedValue {
        if t < self.begin_time {
            return self.from_value;
        }
        if t >= self.end_time() {
            return match self.fill_mode {
                FillMode::Forwards => self.to_value,
                FillMode::Removed => self.from_value,
            };
        }

        let eased = self.timing.apply(self.progress_at(t));
        self.from_value.lerp(&self.to_value, eased)
    }

    /// Whether the host keeps the final value after `end_time`
    pub fn persists_final_value(&self) -> bool {
        self.fill_mode == FillMode::Forwards && !self.removed_on_completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(begin: f64, duration: f64) -> AnimationDescriptor {
        AnimationDescriptor::one_shot(
            "strokeEnd",
            AnimatedValue::Scalar(0.0),
            AnimatedValue::Scalar(1.0),
            duration,
            begin,
            TimingFunction::Linear,
        )
    }

    #[test]
    fn test_value_before_during_after() {
        let anim = stroke(10.5, 1.0);

        assert_eq!(anim.value_at(0.0), AnimatedValue::Scalar(0.0));
        assert_eq!(anim.value_at(10.5), AnimatedValue::Scalar(0.0));
        assert_eq!(anim.value_at(11.0), AnimatedValue::Scalar(0.5));
        assert_eq!(anim.value_at(11.5), AnimatedValue::Scalar(1.0));
        assert_eq!(anim.value_at(1_000.0), AnimatedValue::Scalar(1.0));
    }

    #[test]
    fn test_removed_fill_snaps_back() {
        let mut anim = stroke(0.0, 1.0);
        anim.fill_mode = FillMode::Removed;
        anim.removed_on_completion = true;

        assert_eq!(anim.value_at(2.0), AnimatedValue::Scalar(0.0));
        assert!(!anim.persists_final_value());
    }

    #[test]
    fn test_one_shot_defaults() {
        let anim = stroke(0.0, 1.0);
        assert!(anim.persists_final_value());
        assert!(!anim.autoreverses);
        assert_eq!(anim.repeat_count, 1);
        assert_eq!(anim.fill_mode.as_str(), "persist-final-value");
    }
}
