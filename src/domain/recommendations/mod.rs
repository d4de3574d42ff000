//! Recommendations module - Bounded, prioritized guidance from scores and insights.
//!
//! Rules run in a fixed order and each contributes at most one recommendation.
//! The list is deduplicated by kind, stable-sorted by priority, truncated to
//! the cap, and only then topped up with best-practice fillers.

mod rules;

pub use rules::{RecommendationContext, Rule, RULES};

use serde::{Deserialize, Serialize};

use crate::config::RecommendationConfig;
use crate::domain::foundation::Priority;
use crate::domain::insights::Insight;
use crate::domain::scoring::CombinedScore;

/// Which rule produced a recommendation. At most one per kind per result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    OverallTier,
    WeakestPlatform,
    Imbalance,
    Activity,
    Community,
    Coverage,
    KnowledgeSharing,
    Documentation,
    Networking,
    Consistency,
    Showcase,
    ProfileUpkeep,
}

/// A prioritized piece of guidance with the reason it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub kind: RecommendationKind,
    pub text: String,
    pub rationale: String,
}

impl Recommendation {
    pub fn new(
        priority: Priority,
        kind: RecommendationKind,
        text: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            kind,
            text: text.into(),
            rationale: rationale.into(),
        }
    }
}

/// Always-applicable advice used to fill the list up to the cap.
const FILLERS: [(RecommendationKind, &str, &str); 6] = [
    (
        RecommendationKind::KnowledgeSharing,
        "Share what you learn through technical articles, talks, or detailed answers",
        "Published knowledge compounds visibility on every platform",
    ),
    (
        RecommendationKind::Documentation,
        "Keep READMEs and project documentation current",
        "Well-documented work is easier for reviewers to evaluate",
    ),
    (
        RecommendationKind::Networking,
        "Connect with peers in your field and engage with their work",
        "A wider network increases the reach of everything you publish",
    ),
    (
        RecommendationKind::Consistency,
        "Set a weekly routine for small, regular contributions",
        "Steady activity signals sustained engagement",
    ),
    (
        RecommendationKind::Showcase,
        "Pin or feature your best work at the top of each profile",
        "Visitors form an impression from the first few items they see",
    ),
    (
        RecommendationKind::ProfileUpkeep,
        "Review every profile once a quarter and refresh outdated details",
        "Stale profiles undersell recent experience",
    ),
];

pub struct RecommendationSynthesizer<'a> {
    config: &'a RecommendationConfig,
}

impl<'a> RecommendationSynthesizer<'a> {
    pub fn new(config: &'a RecommendationConfig) -> Self {
        Self { config }
    }

    /// Builds at most `max_recommendations` items, sorted Critical first.
    pub fn synthesize(&self, combined: &CombinedScore, insights: &[Insight]) -> Vec<Recommendation> {
        if combined.is_empty() {
            return Vec::new();
        }

        let context = RecommendationContext {
            combined,
            insights,
            config: self.config,
        };
        let mut recommendations: Vec<Recommendation> = Vec::new();
        for rule in RULES.iter() {
            if let Some(recommendation) = rule(&context) {
                if !recommendations
                    .iter()
                    .any(|existing| existing.kind == recommendation.kind)
                {
                    recommendations.push(recommendation);
                }
            }
        }

        // sort_by_key is stable: equal priorities keep rule order
        recommendations.sort_by_key(|recommendation| recommendation.priority);
        let cap = self.config.effective_cap();
        recommendations.truncate(cap);

        for (kind, text, rationale) in FILLERS {
            if recommendations.len() >= cap {
                break;
            }
            recommendations.push(Recommendation::new(Priority::Low, kind, text, rationale));
        }

        tracing::debug!(count = recommendations.len(), "recommendations synthesized");
        recommendations
    }
}
