//! Overlay configuration
//!
//! Every field has a default matching the stock chart look, so a TOML file
//! only needs the keys it overrides:
//!
//! ```toml
//! mask_overshoot = 500.0
//! line_inset = 0.0
//! ```

use chartfx_animation::MASK_OVERSHOOT;
use chartfx_core::{ChartError, LinearGradient, Result};
use chartfx_paint::heat_gradient;
use serde::{Deserialize, Serialize};

/// Tunables shared by the area and line overlays
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Width added past the content when a wipe mask finishes
    pub mask_overshoot: f64,
    /// Offset applied to line paths, and how far the line gradient extends past the view
    pub line_inset: f64,
    /// Stroke width of area layers
    pub area_line_width: f64,
    /// Stroke the area outline when shown without a stroke reveal
    pub area_outline: bool,
    /// Gradient painted through line strokes
    pub line_gradient: LinearGradient,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            mask_overshoot: MASK_OVERSHOOT,
            line_inset: 2.0,
            area_line_width: 2.0,
            area_outline: false,
            line_gradient: heat_gradient(),
        }
    }
}

impl OverlayConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: OverlayConfig =
            toml::from_str(source).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ChartError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mask_overshoot.is_finite() || self.mask_overshoot < 0.0 {
            return Err(ChartError::Config(format!(
                "mask_overshoot must be a non-negative number, got {}",
                self.mask_overshoot
            )));
        }
        if !self.line_inset.is_finite() {
            return Err(ChartError::Config(format!(
                "line_inset must be finite, got {}",
                self.line_inset
            )));
        }
        if !self.area_line_width.is_finite() || self.area_line_width < 0.0 {
            return Err(ChartError::Config(format!(
                "area_line_width must be a non-negative number, got {}",
                self.area_line_width
            )));
        }
        if self.line_gradient.stops.is_empty() {
            return Err(ChartError::Config("line_gradient needs at least one stop".into()));
        }

        let mut previous = 0.0;
        for stop in &self.line_gradient.stops {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChartError::Config(format!(
                    "line_gradient stop offset {} is outside [0, 1]",
                    stop.offset
                )));
            }
            if stop.offset < previous {
                return Err(ChartError::Config(format!(
                    "line_gradient stop offset {} comes after {}",
                    stop.offset, previous
                )));
            }
            previous = stop.offset;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OverlayConfig::default();
        assert_eq!(config.mask_overshoot, 2000.0);
        assert_eq!(config.line_inset, 2.0);
        assert_eq!(config.line_gradient.stops.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = OverlayConfig::from_toml_str("mask_overshoot = 500.0\n").unwrap();
        assert_eq!(config.mask_overshoot, 500.0);
        assert_eq!(config.line_inset, 2.0);
        assert!(!config.area_outline);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(OverlayConfig::from_toml_str("").unwrap(), OverlayConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = OverlayConfig::from_toml_str("mask_overshoot = \"wide\"").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));

        let err = OverlayConfig::from_toml_str("mask_overshoot = -1.0").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    const STOP_COLOR: &str = "color = { r = 1.0, g = 0.0, b = 0.0, a = 1.0 }";

    fn gradient_toml(offsets: &[f64]) -> String {
        let mut text = String::from("[line_gradient]\nstart = { x = 0.0, y = 0.5 }\nend = { x = 1.0, y = 0.5 }\n");
        for offset in offsets {
            text.push_str(&format!("[[line_gradient.stops]]\noffset = {offset:?}\n{STOP_COLOR}\n"));
        }
        text
    }

    #[test]
    fn test_gradient_offsets_out_of_range_rejected() {
        let err = OverlayConfig::from_toml_str(&gradient_toml(&[0.9, 3.0, -1.0])).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));

        assert!(OverlayConfig::from_toml_str(&gradient_toml(&[0.0, 1.5])).is_err());
    }

    #[test]
    fn test_gradient_offsets_must_ascend() {
        assert!(OverlayConfig::from_toml_str(&gradient_toml(&[0.0, 0.8, 0.4])).is_err());

        let config = OverlayConfig::from_toml_str(&gradient_toml(&[0.0, 0.25, 0.25, 1.0])).unwrap();
        assert_eq!(config.line_gradient.locations(), vec![0.0, 0.25, 0.25, 1.0]);
    }

    #[test]
    fn test_toml_round_trip_of_gradient() {
        let text = OverlayConfig::default().to_toml_string().unwrap();
        let parsed = OverlayConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.line_gradient, heat_gradient());
    }
}
