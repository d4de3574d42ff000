//! Insights module - Strength and improvement findings per platform.
//!
//! Every factor is checked against two bands. At or above the strength band
//! it produces a strength that cites the raw value; at or below the
//! improvement band it produces an improvement with a tip. The bands never
//! overlap, so a factor yields at most one insight per run.

mod github;
mod linkedin;
mod stackoverflow;

pub use github::GitHubInsights;
pub use linkedin::LinkedInInsights;
pub use stackoverflow::StackOverflowInsights;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::InsightThresholds;
use crate::domain::foundation::Platform;
use crate::domain::metrics::NormalizedMetrics;
use crate::domain::scoring::{Factor, FactorScore, SubScore};

/// Whether an insight reports something done well or something to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Strength,
    Improvement,
}

/// One qualitative finding tied to a platform factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub platform: Platform,
    pub factor: Factor,
    pub category: String,
    pub polarity: Polarity,
    pub text: String,
    /// Actionable advice; present on improvements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Insight {
    pub fn is_strength(&self) -> bool {
        self.polarity == Polarity::Strength
    }

    pub fn is_improvement(&self) -> bool {
        self.polarity == Polarity::Improvement
    }
}

/// Text for an improvement insight and the tip that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Improvement {
    pub text: String,
    pub tip: String,
}

impl Improvement {
    pub fn new(text: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tip: tip.into(),
        }
    }
}

/// Headline numbers and general advice for one platform, outside the polar insights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformNotes {
    pub key_metrics: BTreeMap<String, String>,
    pub tips: Vec<String>,
}

impl PlatformNotes {
    pub(crate) fn metric(mut self, name: &str, value: impl ToString) -> Self {
        self.key_metrics.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn tip_if(mut self, condition: bool, tip: &str) -> Self {
        if condition {
            self.tips.push(tip.to_string());
        }
        self
    }
}

/// Platform-specific wording for the factor bands.
pub trait InsightRule {
    fn platform(&self) -> Platform;

    /// Text for a factor that reached its strength band.
    fn strength(&self, entry: &FactorScore) -> String;

    /// Text and tip for a factor inside its improvement band.
    fn improvement(&self, entry: &FactorScore) -> Improvement;

    fn notes(&self) -> PlatformNotes;
}

/// Picks the wording rules for a platform's metrics.
pub fn rule_for(metrics: &NormalizedMetrics) -> Box<dyn InsightRule + '_> {
    match metrics {
        NormalizedMetrics::GitHub(metrics) => Box::new(GitHubInsights::new(metrics)),
        NormalizedMetrics::StackOverflow(metrics) => Box::new(StackOverflowInsights::new(metrics)),
        NormalizedMetrics::LinkedIn(metrics) => Box::new(LinkedInInsights::new(metrics)),
    }
}

/// Applies the configured bands to a platform breakdown.
pub struct InsightAnalyzer<'a> {
    thresholds: &'a InsightThresholds,
}

impl<'a> InsightAnalyzer<'a> {
    pub fn new(thresholds: &'a InsightThresholds) -> Self {
        Self { thresholds }
    }

    /// Insights for one present platform, in breakdown order.
    pub fn analyze(&self, sub_score: &SubScore, metrics: &NormalizedMetrics) -> Vec<Insight> {
        if sub_score.platform != metrics.platform() {
            tracing::warn!(
                scored = %sub_score.platform,
                metrics = %metrics.platform(),
                "sub-score and metrics belong to different platforms"
            );
            return Vec::new();
        }
        let rule = rule_for(metrics);
        self.apply(sub_score, rule.as_ref())
    }

    /// Key metrics and general tips for one present platform.
    pub fn notes(&self, metrics: &NormalizedMetrics) -> PlatformNotes {
        rule_for(metrics).notes()
    }

    fn apply(&self, sub_score: &SubScore, rule: &dyn InsightRule) -> Vec<Insight> {
        let insights: Vec<Insight> = sub_score
            .breakdown
            .iter()
            .filter_map(|entry| {
                let bands = self.thresholds.for_factor(entry.factor);
                let insight = |polarity: Polarity, text: String, tip: Option<String>| Insight {
                    platform: rule.platform(),
                    factor: entry.factor,
                    category: entry.factor.category().to_string(),
                    polarity,
                    text,
                    tip,
                };
                if entry.score >= bands.strength {
                    Some(insight(Polarity::Strength, rule.strength(entry), None))
                } else if entry.score <= bands.improvement {
                    let improvement = rule.improvement(entry);
                    Some(insight(
                        Polarity::Improvement,
                        improvement.text,
                        Some(improvement.tip),
                    ))
                } else {
                    None
                }
            })
            .collect();

        tracing::debug!(
            platform = %sub_score.platform,
            count = insights.len(),
            "insights generated"
        );
        insights
    }
}

/// Formats a count with thousands separators.
pub(crate) fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "n thing" or "n things".
pub(crate) fn plural(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", grouped(count), plural)
    }
}
