//! The scorer seam and the breakdown accumulator shared by all platforms.

use crate::config::ScoringTargets;
use crate::domain::foundation::{Percentage, Platform};
use crate::domain::metrics::NormalizedMetrics;

use super::factor::{Factor, FactorScore, SubScore};
use super::github::GitHubScorer;
use super::linkedin::LinkedInScorer;
use super::stackoverflow::StackOverflowScorer;

/// Maps one platform's normalized metrics onto its capped factors.
pub trait PlatformScorer {
    type Metrics;

    fn platform(&self) -> Platform;

    /// Scores every factor of the platform; the breakdown is always complete.
    fn score(&self, metrics: &Self::Metrics) -> SubScore;
}

/// Scores any platform's metrics with the matching scorer.
pub fn score_platform(metrics: &NormalizedMetrics, targets: &ScoringTargets) -> SubScore {
    let sub_score = match metrics {
        NormalizedMetrics::GitHub(metrics) => GitHubScorer::new(&targets.github).score(metrics),
        NormalizedMetrics::StackOverflow(metrics) => {
            StackOverflowScorer::new(&targets.stackoverflow).score(metrics)
        }
        NormalizedMetrics::LinkedIn(metrics) => {
            LinkedInScorer::new(&targets.linkedin).score(metrics)
        }
    };
    tracing::debug!(
        platform = %sub_score.platform,
        total = sub_score.total.value(),
        "platform scored"
    );
    sub_score
}

/// Collects factor scores in order and derives the platform total from the
/// unrounded values.
pub(crate) struct Breakdown {
    platform: Platform,
    unrounded_total: f64,
    entries: Vec<FactorScore>,
}

impl Breakdown {
    pub(crate) fn new(platform: Platform) -> Self {
        Self {
            platform,
            unrounded_total: 0.0,
            entries: Vec::with_capacity(Factor::for_platform(platform).len()),
        }
    }

    pub(crate) fn add(mut self, factor: Factor, points: f64, raw_value: u64) -> Self {
        debug_assert_eq!(factor.platform(), self.platform);
        let points = if points.is_finite() {
            points.clamp(0.0, factor.cap())
        } else {
            0.0
        };
        self.unrounded_total += points;
        self.entries.push(FactorScore::new(factor, points, raw_value));
        self
    }

    pub(crate) fn finish(self) -> SubScore {
        SubScore {
            platform: self.platform,
            total: Percentage::from_score(self.unrounded_total),
            breakdown: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::{GitHubMetrics, LinkedInMetrics, StackOverflowMetrics};

    #[test]
    fn zero_metrics_still_produce_full_breakdowns() {
        let targets = ScoringTargets::default();
        for metrics in [
            NormalizedMetrics::GitHub(GitHubMetrics::default()),
            NormalizedMetrics::StackOverflow(StackOverflowMetrics::default()),
            NormalizedMetrics::LinkedIn(LinkedInMetrics::default()),
        ] {
            let sub_score = score_platform(&metrics, &targets);
            assert_eq!(sub_score.platform, metrics.platform());
            assert_eq!(sub_score.total, Percentage::ZERO);
            let factors: Vec<Factor> = sub_score.breakdown.iter().map(|f| f.factor).collect();
            assert_eq!(factors, Factor::for_platform(metrics.platform()).to_vec());
        }
    }

    #[test]
    fn breakdown_clamps_each_factor_to_its_cap() {
        let sub_score = Breakdown::new(Platform::GitHub)
            .add(Factor::GitHubRepositories, 500.0, 500)
            .add(Factor::GitHubStars, -3.0, 0)
            .finish();
        assert_eq!(sub_score.factor_score(Factor::GitHubRepositories), 20.0);
        assert_eq!(sub_score.factor_score(Factor::GitHubStars), 0.0);
        assert_eq!(sub_score.total.value(), 20);
    }

    #[test]
    fn total_uses_unrounded_factor_scores() {
        let sub_score = Breakdown::new(Platform::LinkedIn)
            .add(Factor::LinkedInProfileCompleteness, 0.24, 0)
            .add(Factor::LinkedInExperience, 0.24, 0)
            .add(Factor::LinkedInEducation, 0.04, 0)
            .finish();
        // Each rounds down on its own, but together they reach 0.52 -> 1.
        assert_eq!(sub_score.total.value(), 1);
    }
}
