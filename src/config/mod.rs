//! Engine configuration module
//!
//! Every tunable of the engine lives here: platform weights, scoring targets,
//! insight bands, recommendation and plan gates, and logging. All sections
//! default to the built-in values, so an empty source yields a working config.
//!
//! Configuration is loaded from environment variables with the `FOOTPRINT`
//! prefix, with nested values separated by double underscores, or from a
//! YAML document.
//!
//! # Example
//!
//! ```no_run
//! use footprint_insights::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("GitHub weight: {}", config.weights.github);
//! ```

mod error;
mod guidance;
mod insights;
mod targets;
mod telemetry;
mod weights;

pub use error::{ConfigError, ValidationError};
pub use guidance::{PlanConfig, RecommendationConfig, MAX_RECOMMENDATIONS};
pub use insights::InsightThresholds;
pub use targets::{GitHubTargets, LinkedInTargets, ScoringTargets, StackOverflowTargets};
pub use telemetry::{LogFormat, TelemetryConfig};
pub use weights::CombinationWeights;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Platform weights for the overall score
    #[serde(default)]
    pub weights: CombinationWeights,

    /// Per-factor scoring targets
    #[serde(default)]
    pub targets: ScoringTargets,

    /// Strength and improvement bands
    #[serde(default)]
    pub insights: InsightThresholds,

    /// Recommendation synthesis settings
    #[serde(default)]
    pub recommendations: RecommendationConfig,

    /// Action plan task gates
    #[serde(default)]
    pub plan: PlanConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FOOTPRINT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to built-in defaults for anything not set
    ///
    /// # Environment Variable Format
    ///
    /// - `FOOTPRINT__WEIGHTS__GITHUB=40` -> `weights.github = 40`
    /// - `FOOTPRINT__TARGETS__GITHUB__STARS=250` -> `targets.github.stars = 250`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FOOTPRINT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load a configuration file, with `FOOTPRINT__*` variables taking precedence.
    ///
    /// The format is inferred from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::default()
                    .prefix("FOOTPRINT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse a YAML document. Missing sections take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that is inconsistent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;
        self.targets.validate()?;
        self.insights.validate()?;
        self.recommendations.validate()?;
        self.plan.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::Factor;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("FOOTPRINT__WEIGHTS__GITHUB");
        env::remove_var("FOOTPRINT__TARGETS__GITHUB__STARS");
        env::remove_var("FOOTPRINT__RECOMMENDATIONS__MAX_RECOMMENDATIONS");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EngineConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.weights, CombinationWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FOOTPRINT__WEIGHTS__GITHUB", "50");
        env::set_var("FOOTPRINT__TARGETS__GITHUB__STARS", "250");
        env::set_var("FOOTPRINT__RECOMMENDATIONS__MAX_RECOMMENDATIONS", "4");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.weights.github, 50);
        assert_eq!(config.weights.linkedin, 30);
        assert_eq!(config.targets.github.stars, 250.0);
        assert_eq!(config.recommendations.max_recommendations, 4);
    }

    #[test]
    fn test_from_yaml_str_partial_document() {
        let yaml = r#"
weights:
  linkedin: 0
insights:
  factors:
    linkedin_skills:
      strength: 18.0
      improvement: 4.0
"#;
        let config = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.weights.linkedin, 0);
        assert_eq!(config.weights.github, 35);
        assert_eq!(
            config.insights.for_factor(Factor::LinkedInSkills).strength,
            18.0
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_str_rejects_bad_types() {
        let result = EngineConfig::from_yaml_str("weights:\n  github: lots\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_validate_surfaces_first_error() {
        let mut config = EngineConfig::default();
        config.plan.stackoverflow_answering_below = 150;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ThresholdOutOfRange(_))
        ));
    }
}
