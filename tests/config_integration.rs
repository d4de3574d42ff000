//! Integration tests for loading alternate engine profiles from disk.

use serde_json::json;
use std::io::Write;

use footprint_insights::config::{ConfigError, ValidationError};
use footprint_insights::domain::foundation::{Platform, Timestamp};
use footprint_insights::domain::scoring::Factor;
use footprint_insights::{EngineConfig, FootprintAnalyzer, PlatformInputs, RawPlatformData};

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn profile_file_overrides_weights_and_targets() {
    let file = yaml_file(
        "weights:\n  github: 50\n  stackoverflow: 30\n  linkedin: 20\ntargets:\n  github:\n    stars: 240\n",
    );

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.weights.github, 50);
    assert_eq!(config.targets.github.stars, 240.0);
    // untouched values keep their defaults
    assert_eq!(config.targets.github.repositories, 20.0);
    assert!(config.validate().is_ok());

    let inputs = PlatformInputs::new().with(
        RawPlatformData::from_json(
            Platform::GitHub,
            json!({"statistics": {"total_stars": 120}}),
        )
        .unwrap(),
    );
    let result = FootprintAnalyzer::new(config).analyze_at(&inputs, Timestamp::from_unix_secs(0));
    let github = result.scores.sub_score(Platform::GitHub).unwrap();
    // 120 / 240 * 25
    assert_eq!(github.factor_score(Factor::GitHubStars), 12.5);
}

#[test]
fn missing_profile_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = EngineConfig::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn loaded_profile_can_fail_validation() {
    let file = yaml_file("weights:\n  github: 0\n  stackoverflow: 0\n  linkedin: 0\n");

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.validate(), Err(ValidationError::ZeroWeightTotal));
}

#[test]
fn yaml_profile_matches_file_profile() {
    let yaml = "recommendations:\n  max_recommendations: 4\n";
    let file = yaml_file(yaml);

    let from_file = EngineConfig::from_file(file.path()).unwrap();
    let from_str = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(from_file, from_str);
    assert_eq!(from_str.recommendations.max_recommendations, 4);
}
