//! LinkedIn scorer.

use crate::config::LinkedInTargets;
use crate::domain::foundation::Platform;
use crate::domain::metrics::LinkedInMetrics;

use super::factor::{Factor, SubScore};
use super::formula::linear;
use super::scorer::{Breakdown, PlatformScorer};

pub struct LinkedInScorer<'a> {
    targets: &'a LinkedInTargets,
}

impl<'a> LinkedInScorer<'a> {
    pub fn new(targets: &'a LinkedInTargets) -> Self {
        Self { targets }
    }
}

impl PlatformScorer for LinkedInScorer<'_> {
    type Metrics = LinkedInMetrics;

    fn platform(&self) -> Platform {
        Platform::LinkedIn
    }

    fn score(&self, metrics: &LinkedInMetrics) -> SubScore {
        let t = self.targets;
        let linear_factor = |factor: Factor, value: u64, target: f64| {
            linear(value as f64, target, factor.cap())
        };

        Breakdown::new(Platform::LinkedIn)
            .add(
                Factor::LinkedInProfileCompleteness,
                linear_factor(
                    Factor::LinkedInProfileCompleteness,
                    metrics.filled_profile_fields,
                    metrics.profile_field_total() as f64,
                ),
                metrics.filled_profile_fields,
            )
            .add(
                Factor::LinkedInExperience,
                linear_factor(Factor::LinkedInExperience, metrics.experience_count, t.experience),
                metrics.experience_count,
            )
            .add(
                Factor::LinkedInEducation,
                linear_factor(Factor::LinkedInEducation, metrics.education_count, t.education),
                metrics.education_count,
            )
            .add(
                Factor::LinkedInSkills,
                linear_factor(Factor::LinkedInSkills, metrics.skill_count, t.skills),
                metrics.skill_count,
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_scraper_sample() {
        let targets = LinkedInTargets::default();
        let metrics = LinkedInMetrics {
            filled_profile_fields: 4,
            about_length: 24,
            experience_count: 2,
            education_count: 1,
            skill_count: 4,
        };

        let sub_score = LinkedInScorer::new(&targets).score(&metrics);

        assert_eq!(sub_score.factor_score(Factor::LinkedInProfileCompleteness), 30.0);
        assert_eq!(sub_score.factor_score(Factor::LinkedInExperience), 12.0);
        assert_eq!(sub_score.factor_score(Factor::LinkedInEducation), 6.7);
        assert_eq!(sub_score.factor_score(Factor::LinkedInSkills), 8.0);
        // 30 + 12 + 6.667 + 8
        assert_eq!(sub_score.total.value(), 57);
    }

    #[test]
    fn partial_profile_scores_proportionally() {
        let targets = LinkedInTargets::default();
        let metrics = LinkedInMetrics {
            filled_profile_fields: 2,
            ..LinkedInMetrics::default()
        };
        let sub_score = LinkedInScorer::new(&targets).score(&metrics);
        assert_eq!(sub_score.factor_score(Factor::LinkedInProfileCompleteness), 15.0);
        assert_eq!(sub_score.total.value(), 15);
    }
}
