//! Qualitative rating labels derived from 0-100 scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative label for a platform or overall score.
///
/// Every score goes through the same threshold table, so a platform and the
/// overall score with equal values always carry the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreRating {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Limited")]
    Limited,
    /// Nothing was scored.
    #[serde(rename = "N/A")]
    NotAvailable,
}

/// Lower bounds for each scored rating, checked top-down.
const RATING_THRESHOLDS: [(f64, ScoreRating); 5] = [
    (90.0, ScoreRating::Excellent),
    (75.0, ScoreRating::VeryGood),
    (60.0, ScoreRating::Good),
    (40.0, ScoreRating::Fair),
    (20.0, ScoreRating::NeedsImprovement),
];

impl ScoreRating {
    /// Maps a score onto the shared threshold table.
    pub fn from_score(score: f64) -> Self {
        RATING_THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, rating)| *rating)
            .unwrap_or(ScoreRating::Limited)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::VeryGood => "Very Good",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::NeedsImprovement => "Needs Improvement",
            ScoreRating::Limited => "Limited",
            ScoreRating::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_boundaries_are_inclusive() {
        assert_eq!(ScoreRating::from_score(100.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(90.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(89.9), ScoreRating::VeryGood);
        assert_eq!(ScoreRating::from_score(75.0), ScoreRating::VeryGood);
        assert_eq!(ScoreRating::from_score(60.0), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(40.0), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(20.0), ScoreRating::NeedsImprovement);
        assert_eq!(ScoreRating::from_score(19.99), ScoreRating::Limited);
        assert_eq!(ScoreRating::from_score(0.0), ScoreRating::Limited);
    }

    #[test]
    fn rating_labels() {
        assert_eq!(ScoreRating::VeryGood.label(), "Very Good");
        assert_eq!(ScoreRating::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn rating_serializes_with_label() {
        let json = serde_json::to_string(&ScoreRating::NeedsImprovement).unwrap();
        assert_eq!(json, "\"Needs Improvement\"");
        let back: ScoreRating = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(back, ScoreRating::NotAvailable);
    }
}
