//! StackOverflow scorer.
//!
//! Reputation uses the logarithmic shape because it spans several orders of
//! magnitude. Answers and questions are composites of volume and votes, with
//! the accepted-answer rate adding a bonus on top of answer volume.

use crate::config::StackOverflowTargets;
use crate::domain::foundation::Platform;
use crate::domain::metrics::StackOverflowMetrics;

use super::factor::{Factor, SubScore};
use super::formula::{linear, logarithmic};
use super::scorer::{Breakdown, PlatformScorer};

/// Points the answer composite gives for hitting each volume target.
const ANSWER_VOLUME_POINTS: f64 = 10.0;
const ANSWER_VOTE_POINTS: f64 = 10.0;
const ANSWER_ACCEPTANCE_POINTS: f64 = 5.0;
const QUESTION_VOLUME_POINTS: f64 = 5.0;
const QUESTION_VOTE_POINTS: f64 = 5.0;

pub struct StackOverflowScorer<'a> {
    targets: &'a StackOverflowTargets,
}

impl<'a> StackOverflowScorer<'a> {
    pub fn new(targets: &'a StackOverflowTargets) -> Self {
        Self { targets }
    }

    /// Gold and silver count extra on top of the plain badge total.
    pub fn badge_points(&self, metrics: &StackOverflowMetrics) -> f64 {
        metrics.gold_badges as f64 * self.targets.gold_weight
            + metrics.silver_badges as f64 * self.targets.silver_weight
            + metrics.total_badges as f64
    }

    /// Zero without answers, whatever the vote total says.
    fn answer_points(&self, metrics: &StackOverflowMetrics) -> f64 {
        if metrics.answer_count == 0 {
            return 0.0;
        }
        let t = self.targets;
        metrics.answer_count as f64 / t.answer_count * ANSWER_VOLUME_POINTS
            + metrics.answer_score as f64 / t.answer_votes * ANSWER_VOTE_POINTS
            + metrics.acceptance_rate() * ANSWER_ACCEPTANCE_POINTS
    }

    fn question_points(&self, metrics: &StackOverflowMetrics) -> f64 {
        let t = self.targets;
        metrics.question_count as f64 / t.question_count * QUESTION_VOLUME_POINTS
            + metrics.question_score as f64 / t.question_votes * QUESTION_VOTE_POINTS
    }
}

impl PlatformScorer for StackOverflowScorer<'_> {
    type Metrics = StackOverflowMetrics;

    fn platform(&self) -> Platform {
        Platform::StackOverflow
    }

    fn score(&self, metrics: &StackOverflowMetrics) -> SubScore {
        let t = self.targets;
        let badge_points = self.badge_points(metrics);

        Breakdown::new(Platform::StackOverflow)
            .add(
                Factor::StackOverflowReputation,
                logarithmic(
                    metrics.reputation as f64,
                    t.reputation_reference,
                    Factor::StackOverflowReputation.cap(),
                ),
                metrics.reputation,
            )
            .add(
                Factor::StackOverflowBadges,
                linear(badge_points, t.badge_points, Factor::StackOverflowBadges.cap()),
                metrics.total_badges,
            )
            .add(
                Factor::StackOverflowAnswers,
                self.answer_points(metrics),
                metrics.answer_count,
            )
            .add(
                Factor::StackOverflowQuestions,
                self.question_points(metrics),
                metrics.question_count,
            )
            .add(
                Factor::StackOverflowTags,
                linear(
                    metrics.tag_count() as f64,
                    t.tags,
                    Factor::StackOverflowTags.cap(),
                ),
                metrics.tag_count(),
            )
            .finish()
    }
}
