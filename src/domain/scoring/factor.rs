//! Scoring factors, their caps, and the per-factor breakdown types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Percentage, Platform};

/// Band boundaries for insight generation, in factor-score units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorThresholds {
    /// Scores at or above this emit a strength.
    pub strength: f64,
    /// Scores at or below this emit an improvement. Always below `strength`.
    pub improvement: f64,
}

impl FactorThresholds {
    pub const fn new(strength: f64, improvement: f64) -> Self {
        Self {
            strength,
            improvement,
        }
    }
}

/// One capped scoring dimension of a platform sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Factor {
    #[serde(rename = "github_repositories")]
    GitHubRepositories,
    #[serde(rename = "github_stars")]
    GitHubStars,
    #[serde(rename = "github_followers")]
    GitHubFollowers,
    #[serde(rename = "github_activity")]
    GitHubActivity,
    #[serde(rename = "github_languages")]
    GitHubLanguages,
    #[serde(rename = "stackoverflow_reputation")]
    StackOverflowReputation,
    #[serde(rename = "stackoverflow_badges")]
    StackOverflowBadges,
    #[serde(rename = "stackoverflow_answers")]
    StackOverflowAnswers,
    #[serde(rename = "stackoverflow_questions")]
    StackOverflowQuestions,
    #[serde(rename = "stackoverflow_tags")]
    StackOverflowTags,
    #[serde(rename = "linkedin_profile_completeness")]
    LinkedInProfileCompleteness,
    #[serde(rename = "linkedin_experience")]
    LinkedInExperience,
    #[serde(rename = "linkedin_education")]
    LinkedInEducation,
    #[serde(rename = "linkedin_skills")]
    LinkedInSkills,
}

const GITHUB_FACTORS: [Factor; 5] = [
    Factor::GitHubRepositories,
    Factor::GitHubStars,
    Factor::GitHubFollowers,
    Factor::GitHubActivity,
    Factor::GitHubLanguages,
];

const STACKOVERFLOW_FACTORS: [Factor; 5] = [
    Factor::StackOverflowReputation,
    Factor::StackOverflowBadges,
    Factor::StackOverflowAnswers,
    Factor::StackOverflowQuestions,
    Factor::StackOverflowTags,
];

const LINKEDIN_FACTORS: [Factor; 4] = [
    Factor::LinkedInProfileCompleteness,
    Factor::LinkedInExperience,
    Factor::LinkedInEducation,
    Factor::LinkedInSkills,
];

impl Factor {
    /// Factors of one platform, in breakdown order.
    pub fn for_platform(platform: Platform) -> &'static [Factor] {
        match platform {
            Platform::GitHub => &GITHUB_FACTORS,
            Platform::StackOverflow => &STACKOVERFLOW_FACTORS,
            Platform::LinkedIn => &LINKEDIN_FACTORS,
        }
    }

    /// Every factor across all platforms.
    pub fn all() -> impl Iterator<Item = Factor> {
        Platform::ordered()
            .into_iter()
            .flat_map(|platform| Factor::for_platform(platform).iter().copied())
    }

    pub fn platform(&self) -> Platform {
        match self {
            Factor::GitHubRepositories
            | Factor::GitHubStars
            | Factor::GitHubFollowers
            | Factor::GitHubActivity
            | Factor::GitHubLanguages => Platform::GitHub,
            Factor::StackOverflowReputation
            | Factor::StackOverflowBadges
            | Factor::StackOverflowAnswers
            | Factor::StackOverflowQuestions
            | Factor::StackOverflowTags => Platform::StackOverflow,
            Factor::LinkedInProfileCompleteness
            | Factor::LinkedInExperience
            | Factor::LinkedInEducation
            | Factor::LinkedInSkills => Platform::LinkedIn,
        }
    }

    /// Maximum points this factor contributes. Caps of one platform sum to 100.
    pub fn cap(&self) -> f64 {
        match self {
            Factor::GitHubRepositories => 20.0,
            Factor::GitHubStars => 25.0,
            Factor::GitHubFollowers => 20.0,
            Factor::GitHubActivity => 20.0,
            Factor::GitHubLanguages => 15.0,
            Factor::StackOverflowReputation => 30.0,
            Factor::StackOverflowBadges => 25.0,
            Factor::StackOverflowAnswers => 25.0,
            Factor::StackOverflowQuestions => 10.0,
            Factor::StackOverflowTags => 10.0,
            Factor::LinkedInProfileCompleteness => 30.0,
            Factor::LinkedInExperience => 30.0,
            Factor::LinkedInEducation => 20.0,
            Factor::LinkedInSkills => 20.0,
        }
    }

    /// Short factor name used in breakdowns.
    pub fn label(&self) -> &'static str {
        match self {
            Factor::GitHubRepositories => "repositories",
            Factor::GitHubStars => "stars",
            Factor::GitHubFollowers => "followers",
            Factor::GitHubActivity => "activity",
            Factor::GitHubLanguages => "languages",
            Factor::StackOverflowReputation => "reputation",
            Factor::StackOverflowBadges => "badges",
            Factor::StackOverflowAnswers => "answers",
            Factor::StackOverflowQuestions => "questions",
            Factor::StackOverflowTags => "tags",
            Factor::LinkedInProfileCompleteness => "profile_completeness",
            Factor::LinkedInExperience => "experience",
            Factor::LinkedInEducation => "education",
            Factor::LinkedInSkills => "skills",
        }
    }

    /// Insight category this factor reports under.
    pub fn category(&self) -> &'static str {
        match self {
            Factor::GitHubRepositories => "Portfolio",
            Factor::GitHubStars => "Recognition",
            Factor::GitHubFollowers => "Network",
            Factor::GitHubActivity => "Activity",
            Factor::GitHubLanguages => "Versatility",
            Factor::StackOverflowReputation => "Reputation",
            Factor::StackOverflowBadges => "Achievements",
            Factor::StackOverflowAnswers => "Contributions",
            Factor::StackOverflowQuestions => "Curiosity",
            Factor::StackOverflowTags => "Expertise",
            Factor::LinkedInProfileCompleteness => "Profile",
            Factor::LinkedInExperience => "Experience",
            Factor::LinkedInEducation => "Education",
            Factor::LinkedInSkills => "Skills",
        }
    }

    /// Factors that measure ongoing contribution rather than accumulated standing.
    pub fn is_activity(&self) -> bool {
        matches!(self, Factor::GitHubActivity | Factor::StackOverflowAnswers)
    }

    /// Built-in insight bands.
    pub fn default_thresholds(&self) -> FactorThresholds {
        match self {
            Factor::GitHubRepositories => FactorThresholds::new(15.0, 4.0),
            Factor::GitHubStars => FactorThresholds::new(20.0, 2.0),
            Factor::GitHubFollowers => FactorThresholds::new(16.0, 1.8),
            Factor::GitHubActivity => FactorThresholds::new(15.0, 4.0),
            Factor::GitHubLanguages => FactorThresholds::new(15.0, 6.0),
            Factor::StackOverflowReputation => FactorThresholds::new(18.0, 11.9),
            Factor::StackOverflowBadges => FactorThresholds::new(5.0, 1.0),
            Factor::StackOverflowAnswers => FactorThresholds::new(15.0, 5.0),
            Factor::StackOverflowQuestions => FactorThresholds::new(7.5, 0.0),
            Factor::StackOverflowTags => FactorThresholds::new(8.0, 2.0),
            Factor::LinkedInProfileCompleteness => FactorThresholds::new(30.0, 7.5),
            Factor::LinkedInExperience => FactorThresholds::new(18.0, 6.0),
            Factor::LinkedInEducation => FactorThresholds::new(6.6, 0.0),
            Factor::LinkedInSkills => FactorThresholds::new(20.0, 8.0),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.platform().key(), self.label())
    }
}

/// Score of one factor together with the raw value it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    /// Points earned, rounded to one decimal, within `[0, cap]`.
    pub score: f64,
    pub cap: f64,
    /// The count or value the score was derived from.
    pub raw_value: u64,
}

impl FactorScore {
    pub(crate) fn new(factor: Factor, unrounded: f64, raw_value: u64) -> Self {
        Self {
            factor,
            score: round_tenth(unrounded),
            cap: factor.cap(),
            raw_value,
        }
    }

    /// Fraction of the cap earned.
    pub fn ratio(&self) -> f64 {
        if self.cap <= 0.0 {
            0.0
        } else {
            self.score / self.cap
        }
    }
}

/// A platform's 0-100 score with its full factor breakdown.
///
/// The breakdown is always complete, even when every factor scored zero, so a
/// computed-but-empty platform is distinguishable from one that was never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub platform: Platform,
    pub total: Percentage,
    pub breakdown: Vec<FactorScore>,
}

impl SubScore {
    pub fn factor(&self, factor: Factor) -> Option<&FactorScore> {
        self.breakdown.iter().find(|entry| entry.factor == factor)
    }

    /// Score of a factor, 0.0 when it is not part of this breakdown.
    pub fn factor_score(&self, factor: Factor) -> f64 {
        self.factor(factor).map(|entry| entry.score).unwrap_or(0.0)
    }
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_sum_to_100_per_platform() {
        for platform in Platform::ordered() {
            let total: f64 = Factor::for_platform(platform).iter().map(Factor::cap).sum();
            assert!(
                (total - 100.0).abs() < f64::EPSILON,
                "{} caps sum to {}",
                platform,
                total
            );
        }
    }

    #[test]
    fn factors_belong_to_their_platform() {
        for platform in Platform::ordered() {
            for factor in Factor::for_platform(platform) {
                assert_eq!(factor.platform(), platform);
            }
        }
        assert_eq!(Factor::all().count(), 14);
    }

    #[test]
    fn default_thresholds_leave_a_silent_band() {
        for factor in Factor::all() {
            let bands = factor.default_thresholds();
            assert!(bands.improvement >= 0.0, "{}", factor);
            assert!(bands.strength > bands.improvement, "{}", factor);
            assert!(bands.strength <= factor.cap(), "{}", factor);
        }
    }

    #[test]
    fn factor_score_rounds_to_one_decimal() {
        let entry = FactorScore::new(Factor::GitHubStars, 2.25 + 0.04, 9);
        assert_eq!(entry.score, 2.3);
        assert_eq!(entry.cap, 25.0);
    }

    #[test]
    fn factor_serializes_with_config_key() {
        let json = serde_json::to_string(&Factor::LinkedInProfileCompleteness).unwrap();
        assert_eq!(json, "\"linkedin_profile_completeness\"");
    }

    #[test]
    fn factor_display_is_dotted() {
        assert_eq!(Factor::StackOverflowTags.to_string(), "stackoverflow.tags");
    }
}
