//! Reveal animations for chart paths
//!
//! [`RevealAnimator`] turns a built path and a [`RevealSpec`] into a
//! [`Reveal`]: either a descriptor for the host to play, or a note that the
//! path should be shown fully (zero duration) or not at all (no points).
//!
//! Lines use a stroke reveal: `strokeEnd` goes from 0 to 1 with an
//! ease-in-ease-out curve. Areas use a mask wipe: the mask's `bounds` width
//! grows linearly from 0 past the content width by [`MASK_OVERSHOOT`].

use chartfx_core::{ChartError, Path, Rect, Result};

use crate::descriptor::AnimationDescriptor;
use crate::easing::TimingFunction;
use crate::values::AnimatedValue;

/// Extra width added to a wipe mask's final bounds so it clears the
/// content even if the content width changes mid-animation
pub const MASK_OVERSHOOT: f64 = 2000.0;

/// Layer property animated by stroke reveals
pub const STROKE_END_KEY_PATH: &str = "strokeEnd";

/// Layer property animated by mask wipes
pub const MASK_BOUNDS_KEY_PATH: &str = "bounds";

/// How a path is revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    /// Animate the stroked fraction of a line path
    StrokeReveal,
    /// Grow a rectangular mask over a filled area
    MaskWipe,
}

/// Timing of a reveal, in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub duration_seconds: f64,
    pub delay_seconds: f64,
    pub kind: RevealKind,
}

impl RevealSpec {
    pub fn new(duration_seconds: f64, delay_seconds: f64, kind: RevealKind) -> Self {
        Self {
            duration_seconds,
            delay_seconds,
            kind,
        }
    }

    pub fn stroke(duration_seconds: f64, delay_seconds: f64) -> Self {
        Self::new(duration_seconds, delay_seconds, RevealKind::StrokeReveal)
    }

    pub fn wipe(duration_seconds: f64, delay_seconds: f64) -> Self {
        Self::new(duration_seconds, delay_seconds, RevealKind::MaskWipe)
    }

    /// Reject negative or non-finite duration and delay
    pub fn validate(&self) -> Result<()> {
        check_parameter("duration", self.duration_seconds)?;
        check_parameter("delay", self.delay_seconds)
    }

    /// Zero duration shows the path fully revealed
    pub fn is_immediate(&self) -> bool {
        self.duration_seconds == 0.0
    }
}

fn check_parameter(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidAnimationParameter { name, value })
    }
}

/// Outcome of asking for a reveal
#[derive(Clone, Debug, PartialEq)]
pub enum Reveal {
    /// Attach this descriptor to the target layer
    Animated(AnimationDescriptor),
    /// Show the path at its final state now: stroke at 100%, no mask
    FullyRevealed,
    /// The path has no points; nothing is drawn and no descriptor is issued
    Skipped,
}

impl Reveal {
    pub fn descriptor(&self) -> Option<&AnimationDescriptor> {
        match self {
            Reveal::Animated(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

/// Builds reveal descriptors. Holds no state beyond the mask overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealAnimator {
    mask_overshoot: f64,
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self {
            mask_overshoot: MASK_OVERSHOOT,
        }
    }
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the wipe overshoot margin.
    ///
    /// The margin must be finite and non-negative so the finished mask
    /// still covers the whole content.
    pub fn with_mask_overshoot(mut self, overshoot: f64) -> Result<Self> {
        check_parameter("mask_overshoot", overshoot)?;
        self.mask_overshoot = overshoot;
        Ok(self)
    }

    pub fn mask_overshoot(&self) -> f64 {
        self.mask_overshoot
    }

    /// Dispatch on `spec.kind`. `content_bounds` is only used by mask wipes.
    pub fn reveal(
        &self,
        path: &Path,
        content_bounds: Rect,
        spec: &RevealSpec,
        issue_time: f64,
    ) -> Result<Reveal> {
        match spec.kind {
            RevealKind::StrokeReveal => self.stroke_reveal(path, spec, issue_time),
            RevealKind::MaskWipe => self.mask_wipe(path, content_bounds, spec, issue_time),
        }
    }

    /// `strokeEnd` from 0 to 1, ease-in-ease-out, starting at `issue_time + delay`
    pub fn stroke_reveal(&self, path: &Path, spec: &RevealSpec, issue_time: f64) -> Result<Reveal> {
        let Some(begin_time) = self.prepare(path, spec, issue_time)? else {
            return Ok(self.unanimated(path, spec));
        };

        let descriptor = AnimationDescriptor::one_shot(
            STROKE_END_KEY_PATH,
            AnimatedValue::Scalar(0.0),
            AnimatedValue::Scalar(1.0),
            spec.duration_seconds,
            begin_time,
            TimingFunction::EaseInEaseOut,
        );
        tracing::debug!(
            begin_time,
            duration = spec.duration_seconds,
            "issuing stroke reveal"
        );
        Ok(Reveal::Animated(descriptor))
    }

    /// Mask `bounds` from zero width to the content width plus the overshoot, linear timing
    pub fn mask_wipe(
        &self,
        path: &Path,
        content_bounds: Rect,
        spec: &RevealSpec,
        issue_time: f64,
    ) -> Result<Reveal> {
        let Some(begin_time) = self.prepare(path, spec, issue_time)? else {
            return Ok(self.unanimated(path, spec));
        };

        let from = Rect::new(0.0, 0.0, 0.0, content_bounds.height());
        let to = content_bounds.with_width(content_bounds.width() + self.mask_overshoot);

        let descriptor = AnimationDescriptor::one_shot(
            MASK_BOUNDS_KEY_PATH,
            AnimatedValue::Rect(from),
            AnimatedValue::Rect(to),
            spec.duration_seconds,
            begin_time,
            TimingFunction::Linear,
        );
        tracing::debug!(
            begin_time,
            duration = spec.duration_seconds,
            target_width = to.width(),
            "issuing mask wipe"
        );
        Ok(Reveal::Animated(descriptor))
    }

    /// Validate, then return the begin time if an animation is needed
    fn prepare(&self, path: &Path, spec: &RevealSpec, issue_time: f64) -> Result<Option<f64>> {
        spec.validate()?;
        if !issue_time.is_finite() {
            return Err(ChartError::InvalidAnimationParameter {
                name: "issue_time",
                value: issue_time,
            });
        }
        if path.point_count() == 0 || spec.is_immediate() {
            return Ok(None);
        }
        Ok(Some(issue_time + spec.delay_seconds))
    }

    fn unanimated(&self, path: &Path, spec: &RevealSpec) -> Reveal {
        if path.point_count() == 0 {
            tracing::debug!(kind = ?spec.kind, "path has no points, skipping reveal");
            Reveal::Skipped
        } else {
            Reveal::FullyRevealed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Path {
        Path::new().move_to(0.0, 0.0).line_to(1.0, 5.0).line_to(2.0, 2.0)
    }

    #[test]
    fn test_stroke_reveal_descriptor() {
        let reveal = RevealAnimator::new()
            .stroke_reveal(&line(), &RevealSpec::stroke(1.0, 0.5), 10.0)
            .unwrap();
        let anim = reveal.descriptor().unwrap();

        assert_eq!(anim.key_path, "strokeEnd");
        assert_eq!(anim.from_value, AnimatedValue::Scalar(0.0));
        assert_eq!(anim.to_value, AnimatedValue::Scalar(1.0));
        assert_eq!(anim.begin_time, 10.5);
        assert_eq!(anim.end_time(), 11.5);
        assert_eq!(anim.timing, TimingFunction::EaseInEaseOut);
        assert!(!anim.removed_on_completion);
        assert_eq!(anim.value_at(11.5), AnimatedValue::Scalar(1.0));
        assert_eq!(anim.value_at(60.0), AnimatedValue::Scalar(1.0));
        assert_eq!(anim.value_at(10.2), AnimatedValue::Scalar(0.0));
    }

    #[test]
    fn test_mask_wipe_overshoots_width() {
        let bounds = Rect::new(0.0, 0.0, 320.0, 200.0);
        let reveal = RevealAnimator::new()
            .mask_wipe(&line().close(), bounds, &RevealSpec::wipe(0.8, 0.0), 3.0)
            .unwrap();
        let anim = reveal.descriptor().unwrap();

        assert_eq!(anim.key_path, "bounds");
        assert_eq!(anim.timing, TimingFunction::Linear);
        assert_eq!(anim.begin_time, 3.0);
        assert_eq!(
            anim.from_value,
            AnimatedValue::Rect(Rect::new(0.0, 0.0, 0.0, 200.0))
        );
        assert_eq!(
            anim.to_value.as_rect().map(|r| r.width()),
            Some(320.0 + MASK_OVERSHOOT)
        );
    }

    #[test]
    fn test_custom_overshoot() {
        let animator = RevealAnimator::new().with_mask_overshoot(50.0).unwrap();
        let reveal = animator
            .mask_wipe(&line(), Rect::new(0.0, 0.0, 100.0, 10.0), &RevealSpec::wipe(1.0, 0.0), 0.0)
            .unwrap();
        assert_eq!(reveal.descriptor().unwrap().to_value.as_rect().unwrap().width(), 150.0);
    }

    #[test]
    fn test_zero_duration_is_fully_revealed() {
        let animator = RevealAnimator::new();
        let stroke = animator.stroke_reveal(&line(), &RevealSpec::stroke(0.0, 2.0), 0.0);
        let wipe = animator.mask_wipe(&line(), Rect::ZERO, &RevealSpec::wipe(0.0, 0.0), 0.0);

        assert_eq!(stroke, Ok(Reveal::FullyRevealed));
        assert_eq!(wipe, Ok(Reveal::FullyRevealed));
    }

    #[test]
    fn test_negative_parameters_rejected() {
        let animator = RevealAnimator::new();

        let err = animator
            .stroke_reveal(&line(), &RevealSpec::stroke(-1.0, 0.0), 0.0)
            .unwrap_err();
        assert_eq!(
            err,
            ChartError::InvalidAnimationParameter {
                name: "duration",
                value: -1.0
            }
        );

        let err = animator
            .mask_wipe(&line(), Rect::ZERO, &RevealSpec::wipe(1.0, -0.5), 0.0)
            .unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidAnimationParameter { name: "delay", .. }
        ));

        assert!(RevealSpec::stroke(f64::NAN, 0.0).validate().is_err());
        assert!(RevealSpec::stroke(1.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_empty_path_is_skipped() {
        let animator = RevealAnimator::new();
        let empty = Path::new();

        assert_eq!(
            animator.stroke_reveal(&empty, &RevealSpec::stroke(1.0, 0.0), 0.0),
            Ok(Reveal::Skipped)
        );
        assert_eq!(
            animator.mask_wipe(&empty.close(), Rect::ZERO, &RevealSpec::wipe(0.0, 0.0), 0.0),
            Ok(Reveal::Skipped)
        );
    }

    #[test]
    fn test_validation_precedes_empty_check() {
        let result =
            RevealAnimator::new().stroke_reveal(&Path::new(), &RevealSpec::stroke(-1.0, 0.0), 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_overshoot_must_cover_content() {
        for bad in [-5000.0, f64::NAN, f64::INFINITY] {
            let err = RevealAnimator::new().with_mask_overshoot(bad).unwrap_err();
            assert!(matches!(
                err,
                ChartError::InvalidAnimationParameter {
                    name: "mask_overshoot",
                    ..
                }
            ));
        }
        assert_eq!(
            RevealAnimator::new().with_mask_overshoot(0.0).unwrap().mask_overshoot(),
            0.0
        );
    }

    #[test]
    fn test_non_finite_issue_time_rejected() {
        let animator = RevealAnimator::new();
        for t in [f64::NAN, f64::NEG_INFINITY] {
            let err = animator
                .stroke_reveal(&line(), &RevealSpec::stroke(1.0, 0.0), t)
                .unwrap_err();
            assert!(matches!(
                err,
                ChartError::InvalidAnimationParameter {
                    name: "issue_time",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_reveal_dispatches_on_kind() {
        let animator = RevealAnimator::new();
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);

        let stroke = animator.reveal(&line(), bounds, &RevealSpec::stroke(1.0, 0.0), 0.0).unwrap();
        let wipe = animator.reveal(&line(), bounds, &RevealSpec::wipe(1.0, 0.0), 0.0).unwrap();

        assert_eq!(stroke.descriptor().unwrap().key_path, STROKE_END_KEY_PATH);
        assert_eq!(wipe.descriptor().unwrap().key_path, MASK_BOUNDS_KEY_PATH);
    }
}
