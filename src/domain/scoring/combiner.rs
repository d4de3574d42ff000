//! Overall Score Combiner - weighted combination of present platform scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::CombinationWeights;
use crate::domain::foundation::{Percentage, Platform, ScoreRating};

use super::factor::{round_tenth, SubScore};

/// Sub-scores of the present platforms plus the combined overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedScore {
    /// Present platforms only, in canonical order.
    pub sub_scores: BTreeMap<Platform, SubScore>,
    /// Unrounded weighted average over present platforms, within `[0, 100]`.
    pub overall: f64,
    pub overall_rating: ScoreRating,
    pub platform_ratings: BTreeMap<Platform, ScoreRating>,
}

impl CombinedScore {
    /// The terminal state when no platform was scored.
    pub fn empty() -> Self {
        Self {
            sub_scores: BTreeMap::new(),
            overall: 0.0,
            overall_rating: ScoreRating::NotAvailable,
            platform_ratings: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sub_scores.is_empty()
    }

    /// Present platforms in canonical order.
    pub fn platforms(&self) -> Vec<Platform> {
        self.sub_scores.keys().copied().collect()
    }

    pub fn sub_score(&self, platform: Platform) -> Option<&SubScore> {
        self.sub_scores.get(&platform)
    }

    /// Total of a present platform; `None` when it was not scored.
    pub fn platform_total(&self, platform: Platform) -> Option<Percentage> {
        self.sub_score(platform).map(|sub_score| sub_score.total)
    }

    pub fn per_platform(&self) -> BTreeMap<Platform, Percentage> {
        self.sub_scores
            .iter()
            .map(|(platform, sub_score)| (*platform, sub_score.total))
            .collect()
    }

    /// Overall score rounded to one decimal for display.
    pub fn overall_rounded(&self) -> f64 {
        round_tenth(self.overall)
    }

    /// Ratings keyed by platform label, plus `"overall"`.
    pub fn ratings(&self) -> BTreeMap<String, ScoreRating> {
        let mut ratings: BTreeMap<String, ScoreRating> = self
            .platform_ratings
            .iter()
            .map(|(platform, rating)| (platform.label().to_string(), *rating))
            .collect();
        ratings.insert("overall".to_string(), self.overall_rating);
        ratings
    }

    /// Lowest-scoring present platform. Ties go to the earlier platform.
    pub fn weakest(&self) -> Option<(Platform, Percentage)> {
        self.per_platform()
            .into_iter()
            .min_by(|(pa, a), (pb, b)| a.cmp(b).then(pa.cmp(pb)))
    }

    /// Highest-scoring present platform. Ties go to the earlier platform.
    pub fn strongest(&self) -> Option<(Platform, Percentage)> {
        self.per_platform()
            .into_iter()
            .max_by(|(pa, a), (pb, b)| a.cmp(b).then(pb.cmp(pa)))
    }
}

/// Combines sub-scores using weights renormalized over the present platforms.
pub struct ScoreCombiner<'a> {
    weights: &'a CombinationWeights,
}

impl<'a> ScoreCombiner<'a> {
    pub fn new(weights: &'a CombinationWeights) -> Self {
        Self { weights }
    }

    /// `overall = Σ(total_i * w_i) / Σ(w_i)` over present platforms.
    ///
    /// Integer weights keep the division exact, so a single platform's overall
    /// is its own total. If every present platform has weight zero the plain
    /// mean is used instead.
    pub fn combine(&self, sub_scores: BTreeMap<Platform, SubScore>) -> CombinedScore {
        if sub_scores.is_empty() {
            return CombinedScore::empty();
        }

        let (weighted_sum, weight_sum) =
            sub_scores
                .iter()
                .fold((0u64, 0u64), |(sum, weights), (platform, sub_score)| {
                    let weight = u64::from(self.weights.weight(*platform));
                    (
                        sum + u64::from(sub_score.total.value()) * weight,
                        weights + weight,
                    )
                });

        let overall = if weight_sum == 0 {
            let total: u64 = sub_scores
                .values()
                .map(|sub_score| u64::from(sub_score.total.value()))
                .sum();
            total as f64 / sub_scores.len() as f64
        } else {
            weighted_sum as f64 / weight_sum as f64
        };
        let overall = overall.clamp(0.0, 100.0);

        let platform_ratings = sub_scores
            .iter()
            .map(|(platform, sub_score)| {
                (*platform, ScoreRating::from_score(sub_score.total.as_f64()))
            })
            .collect();

        let combined = CombinedScore {
            sub_scores,
            overall,
            overall_rating: ScoreRating::from_score(round_tenth(overall)),
            platform_ratings,
        };

        tracing::debug!(
            platforms = combined.sub_scores.len(),
            overall = combined.overall,
            rating = %combined.overall_rating,
            "scores combined"
        );
        combined
    }
}
