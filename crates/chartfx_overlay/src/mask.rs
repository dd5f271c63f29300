//! Wipe mask installation shared by both overlays

use chartfx_animation::AnimationDescriptor;
use chartfx_core::{Point, Rect};
use chartfx_paint::wipe_mask_gradient;

use crate::host::{GradientLayer, GradientLayerExt, OverlayHost};

/// Animation key of mask wipes
pub const WIPE_ANIMATION_KEY: &str = "revealAnimation";

/// Mask the host view with a zero-width gradient and attach the wipe to it
pub(crate) fn install_wipe_mask<H: OverlayHost>(
    host: &mut H,
    bounds: Rect,
    descriptor: AnimationDescriptor,
) {
    let mut mask = host.create_gradient_layer();
    mask.set_anchor_point(Point::ZERO);
    mask.apply_gradient(&wipe_mask_gradient());
    mask.set_bounds(Rect::new(0.0, 0.0, 0.0, bounds.height()));
    mask.add_animation(descriptor, WIPE_ANIMATION_KEY);
    host.set_mask(mask);
}
