//! AnalysisResult - The aggregate root returned by every analysis run.
//!
//! A result is built once per run and only read afterwards. Exporters and
//! hosts render it; nothing in the engine mutates it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Platform, ScoreRating, Timestamp};
use crate::domain::insights::{Insight, PlatformNotes};
use crate::domain::metrics::{FieldIssue, SkipReason};
use crate::domain::plan::ActionItem;
use crate::domain::recommendations::Recommendation;
use crate::domain::scoring::CombinedScore;

/// Version of the serialized result layout.
pub const SCHEMA_VERSION: u32 = 1;

/// How many strengths, improvements, and urgent items a summary lists.
const SUMMARY_LIMIT: usize = 5;

/// Informational record of what was degraded during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Platforms the host attempted but which produced nothing usable.
    pub skipped_platforms: BTreeMap<Platform, SkipReason>,
    /// Fields that were missing or malformed and resolved to a default.
    pub field_issues: Vec<FieldIssue>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.skipped_platforms.is_empty() && self.field_issues.is_empty()
    }
}

/// Complete output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub schema_version: u32,
    pub scores: CombinedScore,
    pub insights: Vec<Insight>,
    pub platform_notes: BTreeMap<Platform, PlatformNotes>,
    pub recommendations: Vec<Recommendation>,
    pub action_plan: Vec<ActionItem>,
    /// Present platforms in canonical order.
    pub platforms_analyzed: Vec<Platform>,
    #[serde(default)]
    pub diagnostics: Diagnostics,
    pub generated_at: Timestamp,
}

impl AnalysisResult {
    /// The terminal result when no platform could be analyzed.
    pub fn empty(generated_at: Timestamp) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            scores: CombinedScore::empty(),
            insights: Vec::new(),
            platform_notes: BTreeMap::new(),
            recommendations: Vec::new(),
            action_plan: Vec::new(),
            platforms_analyzed: Vec::new(),
            diagnostics: Diagnostics::default(),
            generated_at,
        }
    }

    /// True when nothing was scored.
    pub fn is_empty(&self) -> bool {
        self.platforms_analyzed.is_empty()
    }

    pub fn strengths(&self) -> impl Iterator<Item = &Insight> {
        self.insights.iter().filter(|insight| insight.is_strength())
    }

    pub fn improvements(&self) -> impl Iterator<Item = &Insight> {
        self.insights.iter().filter(|insight| insight.is_improvement())
    }

    /// Insights for one platform, in breakdown order.
    pub fn insights_for(&self, platform: Platform) -> impl Iterator<Item = &Insight> {
        self.insights
            .iter()
            .filter(move |insight| insight.platform == platform)
    }

    /// Condensed view for dashboards and report headers.
    pub fn summary(&self) -> FootprintSummary {
        FootprintSummary {
            overall_score: self.scores.overall_rounded(),
            overall_rating: self.scores.overall_rating,
            platforms_analyzed: self.platforms_analyzed.clone(),
            top_strengths: self
                .strengths()
                .take(SUMMARY_LIMIT)
                .map(|insight| insight.text.clone())
                .collect(),
            top_improvements: self
                .improvements()
                .take(SUMMARY_LIMIT)
                .map(|insight| insight.text.clone())
                .collect(),
            priority_actions: self
                .recommendations
                .iter()
                .filter(|recommendation| recommendation.priority.is_urgent())
                .take(SUMMARY_LIMIT)
                .map(|recommendation| recommendation.text.clone())
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Headline view of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintSummary {
    pub overall_score: f64,
    pub overall_rating: ScoreRating,
    pub platforms_analyzed: Vec<Platform>,
    pub top_strengths: Vec<String>,
    pub top_improvements: Vec<String>,
    /// Critical and High recommendations only.
    pub priority_actions: Vec<String>,
}
