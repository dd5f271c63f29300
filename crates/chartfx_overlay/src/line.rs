//! Gradient line overlay
//!
//! The line path is not drawn directly: it masks a gradient layer, so the
//! stroke shows the configured gradient. Stroke reveals animate the mask's
//! `strokeEnd`.

use chartfx_animation::{MediaClock, Reveal, RevealAnimator, RevealKind, RevealSpec};
use chartfx_core::{Path, PathStyle, Point, Result};
use chartfx_paint::PathGenerator;

use crate::config::OverlayConfig;
use crate::host::{GradientLayer, GradientLayerExt, OverlayHost, ShapeLayer, ShapeLayerExt};
use crate::mask::install_wipe_mask;

/// Animation key of stroke reveals
pub const STROKE_ANIMATION_KEY: &str = "strokeEndAnimation";

/// Draws a gradient-stroked line into an [`OverlayHost`]
#[derive(Clone, Debug, Default)]
pub struct LineOverlay {
    config: OverlayConfig,
    animator: RevealAnimator,
}

impl LineOverlay {
    /// Validate `config` and build the overlay from it
    pub fn new(config: OverlayConfig) -> Result<Self> {
        config.validate()?;
        let animator = RevealAnimator::new().with_mask_overshoot(config.mask_overshoot)?;
        Ok(Self { config, animator })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Generate the line path with `generator`, then [`show`](Self::show) it
    pub fn show_points<H: OverlayHost>(
        &self,
        host: &mut H,
        points: &[Point],
        generator: &dyn PathGenerator,
        style: &PathStyle,
        spec: &RevealSpec,
        clock: &dyn MediaClock,
    ) -> Result<Reveal> {
        let path = generator.generate(points, style.line_width);
        self.show(host, &path, style, spec, clock)
    }

    /// Stroke `path` through the line gradient and attach its reveal.
    ///
    /// The path is shifted by the configured inset and the gradient grows
    /// past the host bounds by the same amount, so wide strokes at the
    /// edges are not clipped.
    pub fn show<H: OverlayHost>(
        &self,
        host: &mut H,
        path: &Path,
        style: &PathStyle,
        spec: &RevealSpec,
        clock: &dyn MediaClock,
    ) -> Result<Reveal> {
        let inset = self.config.line_inset;
        let bounds = host.bounds();
        let path = path.translated(inset, inset);
        let reveal = self.animator.reveal(&path, bounds, spec, clock.now())?;

        if reveal == Reveal::Skipped {
            return Ok(reveal);
        }

        let mut gradient = host.create_gradient_layer();
        gradient.apply_gradient(&self.config.line_gradient);
        gradient.set_bounds(bounds.inset(-inset, -inset));

        let mut line = host.create_shape_layer();
        line.apply_style(style);
        line.set_path(&path);

        let mut wipe = None;
        match (&reveal, spec.kind) {
            (Reveal::Animated(descriptor), RevealKind::StrokeReveal) => {
                line.set_stroke_end(0.0);
                line.add_animation(descriptor.clone(), STROKE_ANIMATION_KEY);
            }
            (Reveal::Animated(descriptor), RevealKind::MaskWipe) => {
                line.set_stroke_end(1.0);
                wipe = Some(descriptor.clone());
            }
            _ => line.set_stroke_end(1.0),
        }

        gradient.set_mask(line);
        host.add_gradient_sublayer(gradient);

        if let Some(descriptor) = wipe {
            install_wipe_mask(host, bounds, descriptor);
        }

        tracing::debug!(segments = path.segment_count(), kind = ?spec.kind, "line overlay shown");
        Ok(reveal)
    }
}
