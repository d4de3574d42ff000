//! Configuration error types

use thiserror::Error;

use crate::domain::scoring::Factor;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration document is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Platform weights must not all be zero")]
    ZeroWeightTotal,

    #[error("Scoring target {0} must be greater than zero")]
    NonPositiveTarget(&'static str),

    #[error("Insight thresholds for {factor} are invalid: {reason}")]
    InvalidThresholds { factor: Factor, reason: &'static str },

    #[error("Recommendation cap must be between 1 and {max}, got {value}")]
    InvalidRecommendationCap { value: usize, max: usize },

    #[error("Score threshold {0} must be within 0..=100")]
    ThresholdOutOfRange(&'static str),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
