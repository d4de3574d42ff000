//! Recommendation and action-plan tuning

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Upper bound on recommendations in a result, regardless of configuration.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Recommendation synthesis settings. Score thresholds are on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// How many recommendations to return, at most [`MAX_RECOMMENDATIONS`].
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// A present platform below this is called out as the weakest link.
    #[serde(default = "default_weak_platform_below")]
    pub weak_platform_below: u8,

    /// A weak platform below this is escalated to critical.
    #[serde(default = "default_critical_platform_below")]
    pub critical_platform_below: u8,

    /// Spread between best and worst platform that counts as imbalance.
    #[serde(default = "default_imbalance_gap_above")]
    pub imbalance_gap_above: u8,

    /// GitHub or StackOverflow below this triggers a community nudge.
    #[serde(default = "default_community_below")]
    pub community_below: u8,
}

impl RecommendationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_recommendations == 0 || self.max_recommendations > MAX_RECOMMENDATIONS {
            return Err(ValidationError::InvalidRecommendationCap {
                value: self.max_recommendations,
                max: MAX_RECOMMENDATIONS,
            });
        }
        score("recommendations.weak_platform_below", self.weak_platform_below)?;
        score(
            "recommendations.critical_platform_below",
            self.critical_platform_below,
        )?;
        score("recommendations.imbalance_gap_above", self.imbalance_gap_above)?;
        score("recommendations.community_below", self.community_below)?;
        Ok(())
    }

    /// The configured cap, never above [`MAX_RECOMMENDATIONS`].
    pub fn effective_cap(&self) -> usize {
        self.max_recommendations.min(MAX_RECOMMENDATIONS)
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_recommendations: default_max_recommendations(),
            weak_platform_below: default_weak_platform_below(),
            critical_platform_below: default_critical_platform_below(),
            imbalance_gap_above: default_imbalance_gap_above(),
            community_below: default_community_below(),
        }
    }
}

/// Gates that decide which weekly tasks make it into the action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// LinkedIn below this schedules the profile completion task.
    #[serde(default = "default_linkedin_completion_below")]
    pub linkedin_completion_below: u8,

    /// StackOverflow below this schedules the answering sprint.
    #[serde(default = "default_stackoverflow_answering_below")]
    pub stackoverflow_answering_below: u8,
}

impl PlanConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        score("plan.linkedin_completion_below", self.linkedin_completion_below)?;
        score(
            "plan.stackoverflow_answering_below",
            self.stackoverflow_answering_below,
        )?;
        Ok(())
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            linkedin_completion_below: default_linkedin_completion_below(),
            stackoverflow_answering_below: default_stackoverflow_answering_below(),
        }
    }
}

fn score(name: &'static str, value: u8) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::ThresholdOutOfRange(name));
    }
    Ok(())
}

fn default_max_recommendations() -> usize {
    MAX_RECOMMENDATIONS
}

fn default_weak_platform_below() -> u8 {
    50
}

fn default_critical_platform_below() -> u8 {
    20
}

fn default_imbalance_gap_above() -> u8 {
    40
}

fn default_community_below() -> u8 {
    60
}

fn default_linkedin_completion_below() -> u8 {
    70
}

fn default_stackoverflow_answering_below() -> u8 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_defaults() {
        let config = RecommendationConfig::default();
        assert_eq!(config.max_recommendations, 6);
        assert_eq!(config.weak_platform_below, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_recommendation_cap_bounds() {
        let mut config = RecommendationConfig::default();
        config.max_recommendations = 7;
        assert!(config.validate().is_err());
        assert_eq!(config.effective_cap(), 6);

        config.max_recommendations = 0;
        assert!(config.validate().is_err());

        config.max_recommendations = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_plan_threshold_out_of_range() {
        let config = PlanConfig {
            linkedin_completion_below: 101,
            ..PlanConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::ThresholdOutOfRange(
                "plan.linkedin_completion_below"
            ))
        );
    }
}
