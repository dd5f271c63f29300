//! Host compositor capabilities
//!
//! Overlays never own layers. They ask the [`OverlayHost`] for fresh layer
//! handles, configure them through these traits and hand them back.

use chartfx_animation::AnimationDescriptor;
use chartfx_core::{
    Color, DashPattern, FillRule, LineCap, LineJoin, LinearGradient, Path, PathStyle, Point, Rect,
};

/// A drawable layer rendering a single path
pub trait ShapeLayer {
    fn set_path(&mut self, path: &Path);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_line_cap(&mut self, cap: LineCap);
    /// `None` draws a solid line
    fn set_dash_pattern(&mut self, pattern: Option<&DashPattern>);
    fn set_fill_rule(&mut self, rule: FillRule);
    /// Fraction of the path that is stroked, 0.0 to 1.0
    fn set_stroke_end(&mut self, stroke_end: f64);
    fn add_animation(&mut self, descriptor: AnimationDescriptor, key: &str);
}

/// A layer filled with a linear gradient, optionally clipped by a mask
pub trait GradientLayer {
    /// Layer type accepted as this layer's mask
    type Mask;

    fn set_colors(&mut self, colors: &[Color]);
    /// Stop locations, each in `[0, 1]`
    fn set_locations(&mut self, locations: &[f64]);
    fn set_start_point(&mut self, point: Point);
    fn set_end_point(&mut self, point: Point);
    fn set_anchor_point(&mut self, point: Point);
    fn set_bounds(&mut self, bounds: Rect);
    fn set_mask(&mut self, mask: Self::Mask);
    fn add_animation(&mut self, descriptor: AnimationDescriptor, key: &str);
}

/// The host view an overlay draws into
pub trait OverlayHost {
    type Shape: ShapeLayer;
    type Gradient: GradientLayer<Mask = Self::Shape>;

    /// Bounds of the host view's content
    fn bounds(&self) -> Rect;
    fn create_shape_layer(&mut self) -> Self::Shape;
    fn create_gradient_layer(&mut self) -> Self::Gradient;
    fn add_shape_sublayer(&mut self, layer: Self::Shape);
    fn add_gradient_sublayer(&mut self, layer: Self::Gradient);
    /// Mask the whole host view
    fn set_mask(&mut self, mask: Self::Gradient);
}

/// Convenience setters built on [`ShapeLayer`]
pub trait ShapeLayerExt: ShapeLayer {
    /// Apply every field of `style`
    fn apply_style(&mut self, style: &PathStyle) {
        self.set_stroke_color(style.stroke_color);
        self.set_fill_color(style.fill_color);
        self.set_line_width(style.line_width);
        self.set_line_join(style.line_join);
        self.set_line_cap(style.line_cap);
        self.set_dash_pattern(style.dash_pattern.as_ref());
        self.set_fill_rule(style.fill_rule);
    }
}

impl<T: ShapeLayer + ?Sized> ShapeLayerExt for T {}

/// Convenience setters built on [`GradientLayer`]
pub trait GradientLayerExt: GradientLayer {
    fn apply_gradient(&mut self, gradient: &LinearGradient) {
        self.set_colors(&gradient.colors());
        self.set_locations(&gradient.locations());
        self.set_start_point(gradient.start);
        self.set_end_point(gradient.end);
    }
}

impl<T: GradientLayer + ?Sized> GradientLayerExt for T {}
