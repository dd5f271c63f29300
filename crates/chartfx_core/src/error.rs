//! Error types shared by every chartfx crate

use thiserror::Error;

/// Errors raised while validating chart drawing or reveal parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A reveal duration or delay was negative or not a finite number
    #[error("Invalid animation parameter `{name}`: {value}")]
    InvalidAnimationParameter {
        /// Parameter name (`duration` or `delay`)
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A dash pattern contained negative, non-finite or only zero lengths
    #[error("Invalid dash pattern: {0}")]
    InvalidDashPattern(String),

    /// Overlay configuration could not be parsed
    #[error("Invalid overlay configuration: {0}")]
    Config(String),
}

/// Result type for chartfx operations
pub type Result<T> = std::result::Result<T, ChartError>;
