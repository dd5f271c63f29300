//! Recording host
//!
//! [`RecordingLayer`] implements both layer capabilities by appending a
//! [`LayerCommand`] per call. [`RecordingHost`] collects the layers an
//! overlay produces. Hosts that replay commands onto a real compositor and
//! tests both consume the recorded lists.

use chartfx_animation::AnimationDescriptor;
use chartfx_core::{Color, DashPattern, FillRule, LineCap, LineJoin, Path, Point, Rect};

use crate::host::{GradientLayer, OverlayHost, ShapeLayer};

/// A single recorded layer call
#[derive(Clone, Debug, PartialEq)]
pub enum LayerCommand {
    SetPath(Path),
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetLineWidth(f64),
    SetLineJoin(LineJoin),
    SetLineCap(LineCap),
    SetDashPattern(Option<Vec<f64>>),
    SetFillRule(FillRule),
    SetStrokeEnd(f64),
    SetColors(Vec<Color>),
    SetLocations(Vec<f64>),
    SetStartPoint(Point),
    SetEndPoint(Point),
    SetAnchorPoint(Point),
    SetBounds(Rect),
    AddAnimation {
        key: String,
        descriptor: AnimationDescriptor,
    },
}

/// Layer that records every call made on it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingLayer {
    commands: Vec<LayerCommand>,
    mask: Option<Box<RecordingLayer>>,
}

impl RecordingLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[LayerCommand] {
        &self.commands
    }

    pub fn mask(&self) -> Option<&RecordingLayer> {
        self.mask.as_deref()
    }

    /// Animations attached to this layer, with their keys
    pub fn animations(&self) -> impl Iterator<Item = (&str, &AnimationDescriptor)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            LayerCommand::AddAnimation { key, descriptor } => Some((key.as_str(), descriptor)),
            _ => None,
        })
    }

    /// Last path set on this layer
    pub fn path(&self) -> Option<&Path> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            LayerCommand::SetPath(path) => Some(path),
            _ => None,
        })
    }

    /// Last stroke end set on this layer
    pub fn stroke_end(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            LayerCommand::SetStrokeEnd(v) => Some(*v),
            _ => None,
        })
    }

    /// Last bounds set on this layer
    pub fn bounds(&self) -> Option<Rect> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            LayerCommand::SetBounds(r) => Some(*r),
            _ => None,
        })
    }

    fn record(&mut self, command: LayerCommand) {
        self.commands.push(command);
    }
}

impl ShapeLayer for RecordingLayer {
    fn set_path(&mut self, path: &Path) {
        self.record(LayerCommand::SetPath(path.clone()));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(LayerCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.record(LayerCommand::SetFillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(LayerCommand::SetLineWidth(width));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.record(LayerCommand::SetLineJoin(join));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.record(LayerCommand::SetLineCap(cap));
    }

    fn set_dash_pattern(&mut self, pattern: Option<&DashPattern>) {
        self.record(LayerCommand::SetDashPattern(
            pattern.map(|p| p.lengths().to_vec()),
        ));
    }

    fn set_fill_rule(&mut self, rule: FillRule) {
        self.record(LayerCommand::SetFillRule(rule));
    }

    fn set_stroke_end(&mut self, stroke_end: f64) {
        self.record(LayerCommand::SetStrokeEnd(stroke_end));
    }

    fn add_animation(&mut self, descriptor: AnimationDescriptor, key: &str) {
        self.record(LayerCommand::AddAnimation {
            key: key.to_string(),
            descriptor,
        });
    }
}

impl GradientLayer for RecordingLayer {
    type Mask = RecordingLayer;

    fn set_colors(&mut self, colors: &[Color]) {
        self.record(LayerCommand::SetColors(colors.to_vec()));
    }

    fn set_locations(&mut self, locations: &[f64]) {
        self.record(LayerCommand::SetLocations(locations.to_vec()));
    }

    fn set_start_point(&mut self, point: Point) {
        self.record(LayerCommand::SetStartPoint(point));
    }

    fn set_end_point(&mut self, point: Point) {
        self.record(LayerCommand::SetEndPoint(point));
    }

    fn set_anchor_point(&mut self, point: Point) {
        self.record(LayerCommand::SetAnchorPoint(point));
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.record(LayerCommand::SetBounds(bounds));
    }

    fn set_mask(&mut self, mask: RecordingLayer) {
        self.mask = Some(Box::new(mask));
    }

    fn add_animation(&mut self, descriptor: AnimationDescriptor, key: &str) {
        ShapeLayer::add_animation(self, descriptor, key);
    }
}

/// Host view that keeps every layer handed to it
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    bounds: Rect,
    sublayers: Vec<RecordingLayer>,
    mask: Option<RecordingLayer>,
}

impl RecordingHost {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Sublayers in the order they were added
    pub fn sublayers(&self) -> &[RecordingLayer] {
        &self.sublayers
    }

    pub fn mask(&self) -> Option<&RecordingLayer> {
        self.mask.as_ref()
    }

    /// True if no overlay has added anything yet
    pub fn is_untouched(&self) -> bool {
        self.sublayers.is_empty() && self.mask.is_none()
    }

    /// Number of animations attached anywhere in the host's layer tree
    pub fn animation_count(&self) -> usize {
        fn count(layer: &RecordingLayer) -> usize {
            layer.animations().count() + layer.mask().map_or(0, count)
        }

        self.sublayers.iter().chain(self.mask.iter()).map(count).sum()
    }
}

impl OverlayHost for RecordingHost {
    type Shape = RecordingLayer;
    type Gradient = RecordingLayer;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn create_shape_layer(&mut self) -> RecordingLayer {
        RecordingLayer::new()
    }

    fn create_gradient_layer(&mut self) -> RecordingLayer {
        RecordingLayer::new()
    }

    fn add_shape_sublayer(&mut self, layer: RecordingLayer) {
        self.sublayers.push(layer);
    }

    fn add_gradient_sublayer(&mut self, layer: RecordingLayer) {
        self.sublayers.push(layer);
    }

    fn set_mask(&mut self, mask: RecordingLayer) {
        self.mask = Some(mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ShapeLayerExt;
    use chartfx_core::PathStyle;

    #[test]
    fn test_apply_style_records_every_field() {
        let mut layer = RecordingLayer::new();
        layer.apply_style(&PathStyle::area(Color::RED));

        assert_eq!(layer.commands().len(), 7);
        assert!(layer
            .commands()
            .contains(&LayerCommand::SetLineJoin(LineJoin::Bevel)));
        assert!(layer
            .commands()
            .contains(&LayerCommand::SetDashPattern(None)));
    }

    #[test]
    fn test_last_value_wins() {
        let mut layer = RecordingLayer::new();
        layer.set_stroke_end(0.0);
        layer.set_stroke_end(1.0);
        assert_eq!(layer.stroke_end(), Some(1.0));
        assert_eq!(layer.path(), None);
    }

    #[test]
    fn test_new_host_is_untouched() {
        let host = RecordingHost::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(host.is_untouched());
        assert_eq!(host.animation_count(), 0);
    }
}
