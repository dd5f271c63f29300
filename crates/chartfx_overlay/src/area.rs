//! Filled area overlay
//!
//! Fills the polygon through the chart points and, by default, reveals it
//! left to right with a mask wipe over the host view.

use chartfx_animation::{MediaClock, Reveal, RevealAnimator, RevealKind, RevealSpec};
use chartfx_core::{Color, PathStyle, Point, Result};
use chartfx_paint::build_area_path;

use crate::config::OverlayConfig;
use crate::host::{OverlayHost, ShapeLayer, ShapeLayerExt};
use crate::line::STROKE_ANIMATION_KEY;
use crate::mask::install_wipe_mask;

/// Draws a filled area into an [`OverlayHost`]
#[derive(Clone, Debug, Default)]
pub struct AreaOverlay {
    config: OverlayConfig,
    animator: RevealAnimator,
}

impl AreaOverlay {
    /// Validate `config` and build the overlay from it
    pub fn new(config: OverlayConfig) -> Result<Self> {
        config.validate()?;
        let animator = RevealAnimator::new().with_mask_overshoot(config.mask_overshoot)?;
        Ok(Self { config, animator })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Style used for an area of the given color
    pub fn style(&self, color: Color) -> PathStyle {
        PathStyle {
            line_width: self.config.area_line_width,
            ..PathStyle::area(color)
        }
    }

    /// Fill the area through `points` and attach its reveal.
    ///
    /// Parameters are validated before the host is touched. With no points
    /// the host is left untouched and [`Reveal::Skipped`] is returned.
    pub fn show<H: OverlayHost>(
        &self,
        host: &mut H,
        points: &[Point],
        color: Color,
        spec: &RevealSpec,
        clock: &dyn MediaClock,
    ) -> Result<Reveal> {
        let bounds = host.bounds();
        let path = build_area_path(points);
        let reveal = self.animator.reveal(&path, bounds, spec, clock.now())?;

        if reveal == Reveal::Skipped {
            return Ok(reveal);
        }

        let mut layer = host.create_shape_layer();
        layer.apply_style(&self.style(color));

        let mut wipe = None;
        match (&reveal, spec.kind) {
            (Reveal::Animated(descriptor), RevealKind::StrokeReveal) => {
                layer.set_stroke_end(0.0);
                layer.add_animation(descriptor.clone(), STROKE_ANIMATION_KEY);
            }
            (Reveal::Animated(descriptor), RevealKind::MaskWipe) => {
                layer.set_stroke_end(self.outline_stroke_end());
                wipe = Some(descriptor.clone());
            }
            _ => layer.set_stroke_end(self.outline_stroke_end()),
        }

        layer.set_path(&path);
        host.add_shape_sublayer(layer);

        if let Some(descriptor) = wipe {
            install_wipe_mask(host, bounds, descriptor);
        }

        tracing::debug!(points = points.len(), kind = ?spec.kind, "area overlay shown");
        Ok(reveal)
    }

    fn outline_stroke_end(&self) -> f64 {
        if self.config.area_outline {
            1.0
        } else {
            0.0
        }
    }
}
