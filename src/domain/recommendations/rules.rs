//! The ordered recommendation rules.

use crate::config::RecommendationConfig;
use crate::domain::foundation::{Platform, Priority, ScoreRating};
use crate::domain::insights::Insight;
use crate::domain::scoring::CombinedScore;

use super::{Recommendation, RecommendationKind};

/// Everything a rule may look at.
pub struct RecommendationContext<'a> {
    pub combined: &'a CombinedScore,
    pub insights: &'a [Insight],
    pub config: &'a RecommendationConfig,
}

pub type Rule = fn(&RecommendationContext<'_>) -> Option<Recommendation>;

/// Evaluation order. Equal priorities keep this order in the final list.
pub const RULES: [Rule; 6] = [
    overall_tier,
    weakest_platform,
    imbalance,
    activity,
    community,
    coverage,
];

fn overall_tier(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let overall = ctx.combined.overall_rounded();
    let rating = ctx.combined.overall_rating;
    let (priority, text) = match rating {
        ScoreRating::Limited => (
            Priority::Critical,
            "Start building your professional footprint: set up and fill in a profile on each platform",
        ),
        ScoreRating::NeedsImprovement => (
            Priority::High,
            "Focus on building a stronger online presence across all platforms",
        ),
        ScoreRating::Fair => (
            Priority::High,
            "Strengthen your foundation with regular, visible contributions",
        ),
        ScoreRating::Good => (
            Priority::Medium,
            "You have a good foundation - focus on consistency and quality",
        ),
        ScoreRating::VeryGood => (
            Priority::Low,
            "Strong presence - deepen your impact with higher-visibility work",
        ),
        ScoreRating::Excellent => (
            Priority::Low,
            "Excellent online presence - maintain your momentum",
        ),
        ScoreRating::NotAvailable => return None,
    };
    Some(Recommendation::new(
        priority,
        RecommendationKind::OverallTier,
        text,
        format!("Overall score is {:.1} ({})", overall, rating),
    ))
}

fn weakest_platform(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let (platform, score) = ctx.combined.weakest()?;
    if score.value() >= ctx.config.weak_platform_below {
        return None;
    }
    let priority = if score.value() < ctx.config.critical_platform_below {
        Priority::Critical
    } else {
        Priority::High
    };
    Some(Recommendation::new(
        priority,
        RecommendationKind::WeakestPlatform,
        format!(
            "Priority: Improve your {} presence (current score: {})",
            platform,
            score.value()
        ),
        format!(
            "{} is your lowest-scoring platform and sits below {}",
            platform, ctx.config.weak_platform_below
        ),
    ))
}

fn imbalance(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    if ctx.combined.sub_scores.len() < 2 {
        return None;
    }
    let (strong, high) = ctx.combined.strongest()?;
    let (weak, low) = ctx.combined.weakest()?;
    let gap = high.value() - low.value();
    if gap <= ctx.config.imbalance_gap_above {
        return None;
    }
    Some(Recommendation::new(
        Priority::Medium,
        RecommendationKind::Imbalance,
        "Work on balancing your presence across all platforms",
        format!(
            "{} scores {} while {} scores {}, a gap of {} points",
            strong,
            high.value(),
            weak,
            low.value(),
            gap
        ),
    ))
}

fn activity(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let flagged: Vec<String> = ctx
        .insights
        .iter()
        .filter(|insight| insight.is_improvement() && insight.factor.is_activity())
        .map(|insight| insight.platform.to_string())
        .collect();
    if flagged.is_empty() {
        return None;
    }
    Some(Recommendation::new(
        Priority::Medium,
        RecommendationKind::Activity,
        "Increase your regular activity and contributions",
        format!("Recent activity is low on {}", flagged.join(" and ")),
    ))
}

fn community(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let below: Vec<String> = [Platform::GitHub, Platform::StackOverflow]
        .into_iter()
        .filter_map(|platform| {
            let total = ctx.combined.platform_total(platform)?;
            (total.value() < ctx.config.community_below)
                .then(|| format!("{} ({})", platform, total.value()))
        })
        .collect();
    if below.is_empty() {
        return None;
    }
    Some(Recommendation::new(
        Priority::Medium,
        RecommendationKind::Community,
        "Engage more with developer communities",
        format!(
            "Community platforms below {}: {}",
            ctx.config.community_below,
            below.join(", ")
        ),
    ))
}

fn coverage(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let missing: Vec<String> = Platform::ordered()
        .into_iter()
        .filter(|platform| ctx.combined.sub_score(*platform).is_none())
        .map(|platform| platform.to_string())
        .collect();
    let (priority, text) = match ctx.combined.sub_scores.len() {
        1 => (
            Priority::High,
            format!("Expand your footprint to {}", missing.join(" and ")),
        ),
        2 => (
            Priority::Medium,
            format!("Add a {} profile to round out your footprint", missing.join(", ")),
        ),
        _ => return None,
    };
    Some(Recommendation::new(
        priority,
        RecommendationKind::Coverage,
        text,
        format!(
            "Only {} of {} platforms were analyzed",
            ctx.combined.sub_scores.len(),
            Platform::ordered().len()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombinationWeights;
    use crate::domain::foundation::Percentage;
    use crate::domain::insights::Polarity;
    use crate::domain::scoring::{Factor, ScoreCombiner, SubScore};
    use std::collections::BTreeMap;

    fn combined(entries: &[(Platform, u8)]) -> CombinedScore {
        let sub_scores: BTreeMap<Platform, SubScore> = entries
            .iter()
            .map(|(platform, total)| {
                (
                    *platform,
                    SubScore {
                        platform: *platform,
                        total: Percentage::new(*total),
                        breakdown: Vec::new(),
                    },
                )
            })
            .collect();
        ScoreCombiner::new(&CombinationWeights::default()).combine(sub_scores)
    }

    fn run(rule: Rule, combined: &CombinedScore, insights: &[Insight]) -> Option<Recommendation> {
        let config = RecommendationConfig::default();
        rule(&RecommendationContext {
            combined,
            insights,
            config: &config,
        })
    }

    #[test]
    fn overall_tier_mirrors_rating_bands() {
        let cases = [
            (10, Priority::Critical),
            (30, Priority::High),
            (50, Priority::High),
            (65, Priority::Medium),
            (80, Priority::Low),
            (95, Priority::Low),
        ];
        for (score, priority) in cases {
            let recommendation =
                run(overall_tier, &combined(&[(Platform::GitHub, score)]), &[]).unwrap();
            assert_eq!(recommendation.priority, priority, "score {}", score);
        }
    }

    #[test]
    fn weakest_platform_names_the_platform() {
        let scores = combined(&[(Platform::GitHub, 70), (Platform::LinkedIn, 35)]);
        let recommendation = run(weakest_platform, &scores, &[]).unwrap();
        assert_eq!(recommendation.priority, Priority::High);
        assert_eq!(
            recommendation.text,
            "Priority: Improve your LinkedIn presence (current score: 35)"
        );
    }

    #[test]
    fn weakest_platform_escalates_when_very_low() {
        let scores = combined(&[(Platform::StackOverflow, 12)]);
        let recommendation = run(weakest_platform, &scores, &[]).unwrap();
        assert_eq!(recommendation.priority, Priority::Critical);
    }

    #[test]
    fn weakest_platform_silent_at_threshold() {
        let scores = combined(&[(Platform::GitHub, 50)]);
        assert!(run(weakest_platform, &scores, &[]).is_none());
    }

    #[test]
    fn imbalance_requires_gap_above_threshold() {
        assert!(run(
            imbalance,
            &combined(&[(Platform::GitHub, 80), (Platform::LinkedIn, 40)]),
            &[]
        )
        .is_none());
        let recommendation = run(
            imbalance,
            &combined(&[(Platform::GitHub, 81), (Platform::LinkedIn, 40)]),
            &[],
        )
        .unwrap();
        assert!(recommendation.rationale.contains("gap of 41"));
    }

    #[test]
    fn imbalance_needs_two_platforms() {
        assert!(run(imbalance, &combined(&[(Platform::GitHub, 100)]), &[]).is_none());
    }

    #[test]
    fn activity_follows_activity_improvements_only() {
        let scores = combined(&[(Platform::GitHub, 50)]);
        let insight = |factor: Factor| Insight {
            platform: factor.platform(),
            factor,
            category: factor.category().to_string(),
            polarity: Polarity::Improvement,
            text: String::new(),
            tip: None,
        };
        assert!(run(activity, &scores, &[insight(Factor::GitHubStars)]).is_none());
        assert!(run(activity, &scores, &[insight(Factor::GitHubActivity)]).is_some());
    }

    #[test]
    fn community_ignores_linkedin() {
        assert!(run(community, &combined(&[(Platform::LinkedIn, 10)]), &[]).is_none());
        assert!(run(community, &combined(&[(Platform::StackOverflow, 59)]), &[]).is_some());
    }

    #[test]
    fn coverage_lists_missing_platforms() {
        let recommendation = run(coverage, &combined(&[(Platform::GitHub, 70)]), &[]).unwrap();
        assert_eq!(recommendation.priority, Priority::High);
        assert_eq!(
            recommendation.text,
            "Expand your footprint to StackOverflow and LinkedIn"
        );

        let recommendation = run(
            coverage,
            &combined(&[(Platform::GitHub, 70), (Platform::LinkedIn, 70)]),
            &[],
        )
        .unwrap();
        assert_eq!(recommendation.priority, Priority::Medium);

        let all = combined(&[
            (Platform::GitHub, 70),
            (Platform::StackOverflow, 70),
            (Platform::LinkedIn, 70),
        ]);
        assert!(run(coverage, &all, &[]).is_none());
    }
}
