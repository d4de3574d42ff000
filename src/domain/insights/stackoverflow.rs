//! StackOverflow wording.

use crate::domain::foundation::Platform;
use crate::domain::metrics::StackOverflowMetrics;
use crate::domain::scoring::{Factor, FactorScore};

use super::{grouped, plural, Improvement, InsightRule, PlatformNotes};

/// Above this many questions the user is nudged to answer more than ask.
const QUESTION_BALANCE_ABOVE: u64 = 20;
/// Acceptance rate below which answer quality is called out.
const LOW_ACCEPTANCE_RATE: f64 = 0.2;
const TOP_TAGS: usize = 3;

pub struct StackOverflowInsights<'a> {
    metrics: &'a StackOverflowMetrics,
}

impl<'a> StackOverflowInsights<'a> {
    pub fn new(metrics: &'a StackOverflowMetrics) -> Self {
        Self { metrics }
    }

    fn top_tags(&self) -> String {
        self.metrics
            .top_tags
            .iter()
            .take(TOP_TAGS)
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl InsightRule for StackOverflowInsights<'_> {
    fn platform(&self) -> Platform {
        Platform::StackOverflow
    }

    fn strength(&self, entry: &FactorScore) -> String {
        let m = self.metrics;
        match entry.factor {
            Factor::StackOverflowReputation => format!(
                "Strong reputation on StackOverflow ({} points)",
                grouped(m.reputation)
            ),
            Factor::StackOverflowBadges if m.gold_badges > 0 => format!(
                "Active contributor with {}, including {} - recognized expert",
                plural(m.total_badges, "badge", "badges"),
                plural(m.gold_badges, "gold badge", "gold badges")
            ),
            Factor::StackOverflowBadges => format!(
                "Active contributor with {}",
                plural(m.total_badges, "badge", "badges")
            ),
            Factor::StackOverflowAnswers => format!(
                "Prolific answerer with {} ({:.1}% accepted)",
                plural(m.answer_count, "answer", "answers"),
                m.acceptance_rate() * 100.0
            ),
            Factor::StackOverflowQuestions => format!(
                "Well-received questions: {} with {} net votes",
                plural(m.question_count, "question", "questions"),
                grouped(m.question_score)
            ),
            Factor::StackOverflowTags => format!(
                "Broad expertise across {} (top: {})",
                plural(m.tag_count(), "tag", "tags"),
                self.top_tags()
            ),
            other => format!("Strong {}", other.label()),
        }
    }

    fn improvement(&self, entry: &FactorScore) -> Improvement {
        let m = self.metrics;
        match entry.factor {
            Factor::StackOverflowReputation => Improvement::new(
                format!("Low StackOverflow reputation ({})", grouped(m.reputation)),
                "Answer more questions in your areas of expertise",
            ),
            Factor::StackOverflowBadges => Improvement::new(
                "Few badges earned",
                "Work towards earning badges by consistent participation",
            ),
            Factor::StackOverflowAnswers
                if m.answer_count > 0 && m.acceptance_rate() < LOW_ACCEPTANCE_RATE =>
            {
                Improvement::new(
                    format!(
                        "Limited answer contributions with a low acceptance rate ({:.1}%)",
                        m.acceptance_rate() * 100.0
                    ),
                    "Focus on providing comprehensive, helpful answers",
                )
            }
            Factor::StackOverflowAnswers => Improvement::new(
                "Limited answer contributions",
                "Answer questions regularly to build reputation",
            ),
            Factor::StackOverflowQuestions => Improvement::new(
                "No questions asked yet",
                "Ask well-researched questions when you get stuck; good questions earn reputation too",
            ),
            Factor::StackOverflowTags => Improvement::new(
                "Answers concentrated in very few tags",
                "Answer in adjacent tags to broaden your visible expertise",
            ),
            other => Improvement::new(
                format!("Low {}", other.label()),
                "Participate more on StackOverflow",
            ),
        }
    }

    fn notes(&self) -> PlatformNotes {
        let m = self.metrics;
        PlatformNotes::default()
            .metric("reputation", m.reputation)
            .metric("badges", m.total_badges)
            .metric("answers", m.answer_count)
            .metric("questions", m.question_count)
            .metric(
                "acceptance_rate",
                format!("{:.1}%", m.acceptance_rate() * 100.0),
            )
            .tip_if(
                m.question_count > QUESTION_BALANCE_ABOVE,
                "Balance asking questions with providing answers",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::TagShare;

    fn entry(factor: Factor) -> FactorScore {
        FactorScore {
            factor,
            score: 0.0,
            cap: factor.cap(),
            raw_value: 0,
        }
    }

    #[test]
    fn reputation_strength_groups_digits() {
        let metrics = StackOverflowMetrics {
            reputation: 12_500,
            ..StackOverflowMetrics::default()
        };
        let text = StackOverflowInsights::new(&metrics).strength(&entry(Factor::StackOverflowReputation));
        assert_eq!(text, "Strong reputation on StackOverflow (12,500 points)");
    }

    #[test]
    fn gold_badges_are_called_out() {
        let metrics = StackOverflowMetrics {
            gold_badges: 2,
            total_badges: 30,
            ..StackOverflowMetrics::default()
        };
        let text = StackOverflowInsights::new(&metrics).strength(&entry(Factor::StackOverflowBadges));
        assert!(text.contains("2 gold badges"));
    }

    #[test]
    fn answers_strength_includes_acceptance() {
        let metrics = StackOverflowMetrics {
            answer_count: 60,
            accepted_answers: 30,
            ..StackOverflowMetrics::default()
        };
        let text = StackOverflowInsights::new(&metrics).strength(&entry(Factor::StackOverflowAnswers));
        assert_eq!(text, "Prolific answerer with 60 answers (50.0% accepted)");
    }

    #[test]
    fn low_acceptance_changes_the_tip() {
        let metrics = StackOverflowMetrics {
            answer_count: 10,
            accepted_answers: 1,
            ..StackOverflowMetrics::default()
        };
        let improvement =
            StackOverflowInsights::new(&metrics).improvement(&entry(Factor::StackOverflowAnswers));
        assert!(improvement.tip.contains("comprehensive"));

        let idle = StackOverflowMetrics::default();
        let improvement =
            StackOverflowInsights::new(&idle).improvement(&entry(Factor::StackOverflowAnswers));
        assert!(improvement.tip.contains("regularly"));
    }

    #[test]
    fn heavy_askers_get_a_balance_tip() {
        let metrics = StackOverflowMetrics {
            question_count: 21,
            top_tags: vec![TagShare {
                name: "rust".to_string(),
                answer_count: 1,
            }],
            ..StackOverflowMetrics::default()
        };
        let notes = StackOverflowInsights::new(&metrics).notes();
        assert_eq!(notes.tips.len(), 1);
        assert_eq!(notes.key_metrics["questions"], "21");
        assert_eq!(notes.key_metrics["acceptance_rate"], "0.0%");
    }
}
