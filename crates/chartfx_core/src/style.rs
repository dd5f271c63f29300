//! Stroke and fill styling for chart paths

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, Result};
use crate::geometry::Color;

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Round join
    #[default]
    Round,
    /// Bevel join (flat corner)
    Bevel,
    /// Miter join (sharp corner)
    Miter,
}

impl LineJoin {
    /// Compositor name of this join
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
        }
    }
}

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Rounded cap extending past the endpoint
    #[default]
    Round,
    /// Flat cap at the endpoint
    Butt,
    /// Square cap extending past the endpoint
    Square,
}

impl LineCap {
    /// Compositor name of this cap
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
            LineCap::Square => "square",
        }
    }
}

/// Rule deciding which regions of a self-intersecting path are filled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillRule {
    /// Non-zero winding; overlapping regions of an area stay filled
    #[default]
    NonZero,
    EvenOdd,
}

/// Alternating on/off segment lengths for dashed strokes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct DashPattern(SmallVec<[f64; 4]>);

impl DashPattern {
    /// Validate and wrap a dash pattern
    pub fn new(lengths: impl IntoIterator<Item = f64>) -> Result<Self> {
        let lengths: SmallVec<[f64; 4]> = lengths.into_iter().collect();

        if lengths.is_empty() {
            return Err(ChartError::InvalidDashPattern("pattern is empty".into()));
        }
        if let Some(bad) = lengths.iter().find(|l| !l.is_finite() || **l < 0.0) {
            return Err(ChartError::InvalidDashPattern(format!(
                "segment length {bad} is not a finite non-negative number"
            )));
        }
        if lengths.iter().all(|l| *l == 0.0) {
            return Err(ChartError::InvalidDashPattern(
                "all segment lengths are zero".into(),
            ));
        }

        Ok(Self(lengths))
    }

    pub fn lengths(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for DashPattern {
    type Error = ChartError;

    fn try_from(lengths: Vec<f64>) -> Result<Self> {
        DashPattern::new(lengths)
    }
}

impl From<DashPattern> for Vec<f64> {
    fn from(pattern: DashPattern) -> Self {
        pattern.0.into_vec()
    }
}

/// Complete styling for a chart path
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    #[serde(default)]
    pub dash_pattern: Option<DashPattern>,
    #[serde(default)]
    pub fill_rule: FillRule,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::CLEAR,
            line_width: 1.0,
            line_join: LineJoin::Round,
            line_cap: LineCap::Round,
            dash_pattern: None,
            fill_rule: FillRule::NonZero,
        }
    }
}

impl PathStyle {
    /// Filled area: fill and stroke share the color, bevel joins, width 2
    pub fn area(color: Color) -> Self {
        Self {
            stroke_color: color,
            fill_color: color,
            line_width: 2.0,
            line_join: LineJoin::Bevel,
            ..Default::default()
        }
    }

    /// Stroked line with a clear fill
    pub fn line(color: Color, width: f64) -> Self {
        Self {
            stroke_color: color,
            line_width: width,
            ..Default::default()
        }
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    pub fn with_dash(mut self, pattern: DashPattern) -> Self {
        self.dash_pattern = Some(pattern);
        self
    }

    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_pattern_rejects_negative() {
        let err = DashPattern::new([4.0, -1.0]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDashPattern(_)));
    }

    #[test]
    fn test_dash_pattern_rejects_all_zero() {
        assert!(DashPattern::new([0.0, 0.0]).is_err());
        assert!(DashPattern::new(Vec::new()).is_err());
    }

    #[test]
    fn test_dash_pattern_keeps_order() {
        let dash = DashPattern::new([6.0, 2.0, 1.0, 2.0]).unwrap();
        assert_eq!(dash.lengths(), &[6.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_area_preset() {
        let style = PathStyle::area(Color::BLUE);
        assert_eq!(style.fill_color, Color::BLUE);
        assert_eq!(style.stroke_color, Color::BLUE);
        assert_eq!(style.line_join, LineJoin::Bevel);
        assert_eq!(style.line_width, 2.0);
        assert_eq!(style.fill_rule, FillRule::NonZero);
    }

    #[test]
    fn test_compositor_names() {
        assert_eq!(LineJoin::Miter.as_str(), "miter");
        assert_eq!(LineCap::Butt.as_str(), "butt");
    }
}
