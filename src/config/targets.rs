//! Scoring targets
//!
//! A target is the raw value at which a linear factor reaches its cap, or the
//! reference point of a logarithmic one.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Targets for every platform scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringTargets {
    #[serde(default)]
    pub github: GitHubTargets,

    #[serde(default)]
    pub stackoverflow: StackOverflowTargets,

    #[serde(default)]
    pub linkedin: LinkedInTargets,
}

impl ScoringTargets {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.github.validate()?;
        self.stackoverflow.validate()?;
        self.linkedin.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubTargets {
    #[serde(default = "default_github_repositories")]
    pub repositories: f64,

    #[serde(default = "default_github_stars")]
    pub stars: f64,

    #[serde(default = "default_github_followers")]
    pub followers: f64,

    /// Repositories updated in the last 30 days.
    #[serde(default = "default_github_recent_repositories")]
    pub recent_repositories: f64,

    #[serde(default = "default_github_languages")]
    pub languages: f64,
}

impl GitHubTargets {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("github.repositories", self.repositories)?;
        positive("github.stars", self.stars)?;
        positive("github.followers", self.followers)?;
        positive("github.recent_repositories", self.recent_repositories)?;
        positive("github.languages", self.languages)
    }
}

impl Default for GitHubTargets {
    fn default() -> Self {
        Self {
            repositories: default_github_repositories(),
            stars: default_github_stars(),
            followers: default_github_followers(),
            recent_repositories: default_github_recent_repositories(),
            languages: default_github_languages(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackOverflowTargets {
    /// Reputation that earns the full reputation cap on the log scale.
    #[serde(default = "default_so_reputation_reference")]
    pub reputation_reference: f64,

    /// Weighted badge points that earn the full badge cap.
    #[serde(default = "default_so_badge_points")]
    pub badge_points: f64,

    #[serde(default = "default_so_gold_weight")]
    pub gold_weight: f64,

    #[serde(default = "default_so_silver_weight")]
    pub silver_weight: f64,

    #[serde(default = "default_so_answer_count")]
    pub answer_count: f64,

    #[serde(default = "default_so_answer_votes")]
    pub answer_votes: f64,

    #[serde(default = "default_so_question_count")]
    pub question_count: f64,

    #[serde(default = "default_so_question_votes")]
    pub question_votes: f64,

    #[serde(default = "default_so_tags")]
    pub tags: f64,
}

impl StackOverflowTargets {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("stackoverflow.reputation_reference", self.reputation_reference)?;
        positive("stackoverflow.badge_points", self.badge_points)?;
        positive("stackoverflow.gold_weight", self.gold_weight)?;
        positive("stackoverflow.silver_weight", self.silver_weight)?;
        positive("stackoverflow.answer_count", self.answer_count)?;
        positive("stackoverflow.answer_votes", self.answer_votes)?;
        positive("stackoverflow.question_count", self.question_count)?;
        positive("stackoverflow.question_votes", self.question_votes)?;
        positive("stackoverflow.tags", self.tags)
    }
}

impl Default for StackOverflowTargets {
    fn default() -> Self {
        Self {
            reputation_reference: default_so_reputation_reference(),
            badge_points: default_so_badge_points(),
            gold_weight: default_so_gold_weight(),
            silver_weight: default_so_silver_weight(),
            answer_count: default_so_answer_count(),
            answer_votes: default_so_answer_votes(),
            question_count: default_so_question_count(),
            question_votes: default_so_question_votes(),
            tags: default_so_tags(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInTargets {
    #[serde(default = "default_linkedin_experience")]
    pub experience: f64,

    #[serde(default = "default_linkedin_education")]
    pub education: f64,

    #[serde(default = "default_linkedin_skills")]
    pub skills: f64,
}

impl LinkedInTargets {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("linkedin.experience", self.experience)?;
        positive("linkedin.education", self.education)?;
        positive("linkedin.skills", self.skills)
    }
}

impl Default for LinkedInTargets {
    fn default() -> Self {
        Self {
            experience: default_linkedin_experience(),
            education: default_linkedin_education(),
            skills: default_linkedin_skills(),
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveTarget(name))
    }
}

fn default_github_repositories() -> f64 {
    20.0
}

fn default_github_stars() -> f64 {
    100.0
}

fn default_github_followers() -> f64 {
    100.0
}

fn default_github_recent_repositories() -> f64 {
    5.0
}

fn default_github_languages() -> f64 {
    5.0
}

fn default_so_reputation_reference() -> f64 {
    100_000.0
}

fn default_so_badge_points() -> f64 {
    50.0
}

fn default_so_gold_weight() -> f64 {
    3.0
}

fn default_so_silver_weight() -> f64 {
    2.0
}

fn default_so_answer_count() -> f64 {
    50.0
}

fn default_so_answer_votes() -> f64 {
    100.0
}

fn default_so_question_count() -> f64 {
    20.0
}

fn default_so_question_votes() -> f64 {
    50.0
}

fn default_so_tags() -> f64 {
    10.0
}

fn default_linkedin_experience() -> f64 {
    5.0
}

fn default_linkedin_education() -> f64 {
    3.0
}

fn default_linkedin_skills() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_defaults_validate() {
        let targets = ScoringTargets::default();
        assert!(targets.validate().is_ok());
        assert_eq!(targets.github.stars, 100.0);
        assert_eq!(targets.stackoverflow.reputation_reference, 100_000.0);
        assert_eq!(targets.linkedin.skills, 10.0);
    }

    #[test]
    fn test_zero_target_rejected() {
        let mut targets = ScoringTargets::default();
        targets.stackoverflow.tags = 0.0;
        assert_eq!(
            targets.validate(),
            Err(ValidationError::NonPositiveTarget("stackoverflow.tags"))
        );
    }

    #[test]
    fn test_nan_target_rejected() {
        let mut targets = ScoringTargets::default();
        targets.github.followers = f64::NAN;
        assert!(targets.validate().is_err());
    }
}
