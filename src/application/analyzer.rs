//! FootprintAnalyzer - Runs the full scoring pipeline for one set of inputs.
//!
//! Stages run in a fixed order: normalize, score, combine, insights,
//! recommendations, plan. Each stage consumes the previous stage's output.
//! Data problems degrade the result; they never become errors.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::EngineConfig;
use crate::domain::foundation::{Platform, Timestamp};
use crate::domain::insights::InsightAnalyzer;
use crate::domain::metrics::{NormalizedMetrics, PlatformInput, PlatformInputs, RawPlatformData};
use crate::domain::plan::ActionPlanBuilder;
use crate::domain::recommendations::RecommendationSynthesizer;
use crate::domain::scoring::{score_platform, ScoreCombiner, SubScore};
use crate::ports::MetricsCollector;

use super::result::{AnalysisResult, Diagnostics, SCHEMA_VERSION};

/// Pipeline entry point. Holds only immutable configuration, so one
/// analyzer can serve any number of concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct FootprintAnalyzer {
    config: EngineConfig,
    plan_start: Option<NaiveDate>,
}

impl FootprintAnalyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            plan_start: None,
        }
    }

    /// Dates action items from the given day. Display only.
    pub fn with_plan_start(mut self, start: NaiveDate) -> Self {
        self.plan_start = Some(start);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyzes the inputs, stamping the result with the current time.
    pub fn analyze(&self, inputs: &PlatformInputs) -> AnalysisResult {
        self.analyze_at(inputs, Timestamp::now())
    }

    /// Analyzes the inputs with a caller-supplied generation time.
    ///
    /// Identical inputs and timestamp always produce an identical result.
    pub fn analyze_at(&self, inputs: &PlatformInputs, generated_at: Timestamp) -> AnalysisResult {
        // 1. Split usable platforms from skipped ones
        let mut diagnostics = Diagnostics::default();
        let mut present: BTreeMap<Platform, NormalizedMetrics> = BTreeMap::new();
        for (platform, input) in inputs.iter() {
            match input {
                PlatformInput::Collected(data) => {
                    let (metrics, issues) = data.normalize();
                    diagnostics.field_issues.extend(issues);
                    present.insert(platform, metrics);
                }
                PlatformInput::Unavailable(reason) => {
                    tracing::warn!(platform = %platform, reason = %reason, "platform skipped");
                    diagnostics.skipped_platforms.insert(platform, reason.clone());
                }
            }
        }

        if present.is_empty() {
            tracing::info!(
                skipped = diagnostics.skipped_platforms.len(),
                "no usable platform data, returning empty analysis"
            );
            let mut result = AnalysisResult::empty(generated_at);
            result.diagnostics = diagnostics;
            return result;
        }

        // 2. Score each present platform and combine
        let sub_scores: BTreeMap<Platform, SubScore> = present
            .iter()
            .map(|(platform, metrics)| (*platform, score_platform(metrics, &self.config.targets)))
            .collect();
        let scores = ScoreCombiner::new(&self.config.weights).combine(sub_scores);

        // 3. Insights and per-platform notes
        let insight_analyzer = InsightAnalyzer::new(&self.config.insights);
        let mut insights = Vec::new();
        let mut platform_notes = BTreeMap::new();
        for (platform, metrics) in &present {
            if let Some(sub_score) = scores.sub_score(*platform) {
                insights.extend(insight_analyzer.analyze(sub_score, metrics));
            }
            platform_notes.insert(*platform, insight_analyzer.notes(metrics));
        }

        // 4. Recommendations
        let recommendations = RecommendationSynthesizer::new(&self.config.recommendations)
            .synthesize(&scores, &insights);

        // 5. Action plan
        let mut plan_builder = ActionPlanBuilder::new(&self.config.plan);
        if let Some(start) = self.plan_start {
            plan_builder = plan_builder.starting_on(start);
        }
        let action_plan = plan_builder.build(&scores);

        let platforms_analyzed = scores.platforms();
        tracing::info!(
            platforms = platforms_analyzed.len(),
            overall = scores.overall_rounded(),
            rating = %scores.overall_rating,
            insights = insights.len(),
            field_issues = diagnostics.field_issues.len(),
            "footprint analysis complete"
        );

        AnalysisResult {
            schema_version: SCHEMA_VERSION,
            scores,
            insights,
            platform_notes,
            recommendations,
            action_plan,
            platforms_analyzed,
            diagnostics,
            generated_at,
        }
    }

    /// Map-based entry point. Absent keys were never scanned; `None` values
    /// count as failed collections.
    pub fn run(&self, raw_by_platform: BTreeMap<Platform, Option<RawPlatformData>>) -> AnalysisResult {
        self.analyze(&PlatformInputs::from(raw_by_platform))
    }

    /// Pulls a report from each collector, then analyzes whatever succeeded.
    pub fn collect_and_analyze(&self, collectors: &[&dyn MetricsCollector]) -> AnalysisResult {
        let mut inputs = PlatformInputs::new();
        for collector in collectors {
            let platform = collector.platform();
            tracing::debug!(platform = %platform, "collecting platform metrics");
            inputs.insert_report(platform, collector.collect());
        }
        self.analyze(&inputs)
    }
}
