//! StackOverflow collector contract and its normalized form.

use serde::{Deserialize, Serialize};

use super::field::{FieldIssue, FieldResolver, RawField};
use crate::domain::foundation::Platform;

/// StackOverflow payload exactly as the collector emits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackOverflowRaw {
    pub reputation: RawField<SoReputation>,
    pub badges: RawField<SoBadges>,
    pub activity: RawField<SoActivity>,
    pub tags: RawField<SoTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoReputation {
    pub score: RawField<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoBadges {
    pub gold: RawField<u64>,
    pub silver: RawField<u64>,
    pub bronze: RawField<u64>,
    pub total: RawField<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoActivity {
    pub answers: RawField<SoAnswers>,
    pub questions: RawField<SoQuestions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoAnswers {
    pub count: RawField<u64>,
    /// Net vote sum across all answers; may be negative.
    pub score: RawField<i64>,
    pub accepted: RawField<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoQuestions {
    pub count: RawField<u64>,
    pub score: RawField<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoTags {
    /// Ordered by the collector, strongest tag first.
    pub top_tags: RawField<Vec<SoTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoTag {
    pub name: RawField<String>,
    pub answer_count: RawField<u64>,
}

/// A tag the user answers in, with the answer count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagShare {
    pub name: String,
    pub answer_count: u64,
}

/// StackOverflow metrics with every default resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackOverflowMetrics {
    pub reputation: u64,
    pub gold_badges: u64,
    pub silver_badges: u64,
    pub bronze_badges: u64,
    pub total_badges: u64,
    pub answer_count: u64,
    /// Net answer votes, floored at zero.
    pub answer_score: u64,
    /// Never exceeds `answer_count`.
    pub accepted_answers: u64,
    pub question_count: u64,
    pub question_score: u64,
    pub top_tags: Vec<TagShare>,
}

impl StackOverflowMetrics {
    /// Fraction of answers that were accepted, 0.0 when there are none.
    pub fn acceptance_rate(&self) -> f64 {
        if self.answer_count == 0 {
            return 0.0;
        }
        self.accepted_answers as f64 / self.answer_count as f64
    }

    pub fn tag_count(&self) -> u64 {
        self.top_tags.len() as u64
    }
}

impl StackOverflowRaw {
    /// Resolves defaults once so scoring never sees a missing field.
    pub fn normalize(&self) -> (StackOverflowMetrics, Vec<FieldIssue>) {
        let mut resolver = FieldResolver::new(Platform::StackOverflow);
        let mut metrics = StackOverflowMetrics::default();

        if let Some(reputation) = resolver.get("reputation", &self.reputation) {
            metrics.reputation = resolver.count("reputation.score", &reputation.score);
        }

        if let Some(badges) = resolver.get("badges", &self.badges) {
            metrics.gold_badges = resolver.count("badges.gold", &badges.gold);
            metrics.silver_badges = resolver.count("badges.silver", &badges.silver);
            metrics.bronze_badges = resolver.count("badges.bronze", &badges.bronze);
            metrics.total_badges = match resolver.get("badges.total", &badges.total) {
                Some(total) => *total,
                None => metrics
                    .gold_badges
                    .saturating_add(metrics.silver_badges)
                    .saturating_add(metrics.bronze_badges),
            };
        }

        if let Some(activity) = resolver.get("activity", &self.activity) {
            if let Some(answers) = resolver.get("activity.answers", &activity.answers) {
                metrics.answer_count = resolver.count("activity.answers.count", &answers.count);
                metrics.answer_score =
                    resolver.non_negative("activity.answers.score", &answers.score);
                metrics.accepted_answers = resolver
                    .count("activity.answers.accepted", &answers.accepted)
                    .min(metrics.answer_count);
            }
            if let Some(questions) = resolver.get("activity.questions", &activity.questions) {
                metrics.question_count =
                    resolver.count("activity.questions.count", &questions.count);
                metrics.question_score =
                    resolver.non_negative("activity.questions.score", &questions.score);
            }
        }

        if let Some(tags) = resolver.get("tags", &self.tags) {
            if let Some(top_tags) = resolver.get("tags.top_tags", &tags.top_tags) {
                metrics.top_tags = top_tags
                    .iter()
                    .filter_map(|tag| {
                        let name = tag.name.value()?.trim();
                        if name.is_empty() {
                            return None;
                        }
                        Some(TagShare {
                            name: name.to_string(),
                            answer_count: tag.answer_count.value().copied().unwrap_or(0),
                        })
                    })
                    .collect();
            }
        }

        (metrics, resolver.into_issues())
    }
}
