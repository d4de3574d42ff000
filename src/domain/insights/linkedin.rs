//! LinkedIn wording.

use crate::domain::foundation::Platform;
use crate::domain::metrics::LinkedInMetrics;
use crate::domain::scoring::{Factor, FactorScore};

use super::{plural, Improvement, InsightRule, PlatformNotes};

/// An About section shorter than this gets an expansion tip.
const SHORT_ABOUT_BELOW: u64 = 100;

pub struct LinkedInInsights<'a> {
    metrics: &'a LinkedInMetrics,
}

impl<'a> LinkedInInsights<'a> {
    pub fn new(metrics: &'a LinkedInMetrics) -> Self {
        Self { metrics }
    }
}

impl InsightRule for LinkedInInsights<'_> {
    fn platform(&self) -> Platform {
        Platform::LinkedIn
    }

    fn strength(&self, entry: &FactorScore) -> String {
        let m = self.metrics;
        match entry.factor {
            Factor::LinkedInProfileCompleteness => "Complete LinkedIn profile".to_string(),
            Factor::LinkedInExperience => format!(
                "Detailed work history with {}",
                plural(m.experience_count, "position", "positions")
            ),
            Factor::LinkedInEducation => format!(
                "Education background documented ({})",
                plural(m.education_count, "entry", "entries")
            ),
            Factor::LinkedInSkills => format!(
                "Comprehensive skills list with {}",
                plural(m.skill_count, "skill", "skills")
            ),
            other => format!("Strong {}", other.label()),
        }
    }

    fn improvement(&self, entry: &FactorScore) -> Improvement {
        let m = self.metrics;
        match entry.factor {
            Factor::LinkedInProfileCompleteness => Improvement::new(
                format!(
                    "Incomplete LinkedIn profile ({}/{} fields)",
                    m.filled_profile_fields,
                    m.profile_field_total()
                ),
                "Complete all profile sections (headline, summary, location)",
            ),
            Factor::LinkedInExperience => Improvement::new(
                "Limited work experience listed",
                "Add all relevant work experiences to your profile",
            ),
            Factor::LinkedInEducation => Improvement::new(
                "No education information",
                "Add your educational qualifications",
            ),
            Factor::LinkedInSkills => Improvement::new(
                format!(
                    "Limited skills listed ({})",
                    plural(m.skill_count, "skill", "skills")
                ),
                "Add more relevant skills to your profile (aim for 10+)",
            ),
            other => Improvement::new(
                format!("Low {}", other.label()),
                "Fill in more of your LinkedIn profile",
            ),
        }
    }

    fn notes(&self) -> PlatformNotes {
        let m = self.metrics;
        PlatformNotes::default()
            .metric(
                "completeness",
                format!("{}/{}", m.filled_profile_fields, m.profile_field_total()),
            )
            .metric("experience", m.experience_count)
            .metric("education", m.education_count)
            .metric("skills", m.skill_count)
            .tip_if(
                m.about_length > 0 && m.about_length < SHORT_ABOUT_BELOW,
                "Expand your About section with more details about your expertise",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(factor: Factor) -> FactorScore {
        FactorScore {
            factor,
            score: 0.0,
            cap: factor.cap(),
            raw_value: 0,
        }
    }

    #[test]
    fn completeness_improvement_reports_fraction() {
        let metrics = LinkedInMetrics {
            filled_profile_fields: 1,
            ..LinkedInMetrics::default()
        };
        let improvement = LinkedInInsights::new(&metrics)
            .improvement(&entry(Factor::LinkedInProfileCompleteness));
        assert_eq!(improvement.text, "Incomplete LinkedIn profile (1/4 fields)");
    }

    #[test]
    fn short_about_gets_a_tip_but_missing_about_does_not() {
        let short = LinkedInMetrics {
            about_length: 24,
            ..LinkedInMetrics::default()
        };
        assert_eq!(LinkedInInsights::new(&short).notes().tips.len(), 1);

        let missing = LinkedInMetrics::default();
        assert!(LinkedInInsights::new(&missing).notes().tips.is_empty());
    }

    #[test]
    fn education_strength_uses_singular() {
        let metrics = LinkedInMetrics {
            education_count: 1,
            ..LinkedInMetrics::default()
        };
        assert_eq!(
            LinkedInInsights::new(&metrics).strength(&entry(Factor::LinkedInEducation)),
            "Education background documented (1 entry)"
        );
    }
}
