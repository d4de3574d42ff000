//! GitHub wording.

use crate::domain::foundation::Platform;
use crate::domain::metrics::GitHubMetrics;
use crate::domain::scoring::{Factor, FactorScore};

use super::{plural, Improvement, InsightRule, PlatformNotes};

const TOP_LANGUAGES: usize = 3;

pub struct GitHubInsights<'a> {
    metrics: &'a GitHubMetrics,
}

impl<'a> GitHubInsights<'a> {
    pub fn new(metrics: &'a GitHubMetrics) -> Self {
        Self { metrics }
    }
}

impl InsightRule for GitHubInsights<'_> {
    fn platform(&self) -> Platform {
        Platform::GitHub
    }

    fn strength(&self, entry: &FactorScore) -> String {
        let m = self.metrics;
        match entry.factor {
            Factor::GitHubRepositories => format!(
                "Strong repository portfolio with {}",
                plural(m.public_repos, "public repository", "public repositories")
            ),
            Factor::GitHubStars => format!(
                "Excellent community recognition with {}",
                plural(m.total_stars, "star", "stars")
            ),
            Factor::GitHubFollowers => format!(
                "Strong developer network with {}",
                plural(m.followers, "follower", "followers")
            ),
            Factor::GitHubActivity => format!(
                "Consistently active on GitHub ({} updated in the last 30 days)",
                plural(m.repos_updated_30d, "repository", "repositories")
            ),
            Factor::GitHubLanguages => format!(
                "Versatile developer with {} ({})",
                plural(m.language_count(), "programming language", "programming languages"),
                m.top_languages(TOP_LANGUAGES).join(", ")
            ),
            other => format!("Strong {}", other.label()),
        }
    }

    fn improvement(&self, entry: &FactorScore) -> Improvement {
        let m = self.metrics;
        match entry.factor {
            Factor::GitHubRepositories => Improvement::new(
                format!("Limited number of public repositories ({})", m.public_repos),
                "Create more public repositories to showcase your work",
            ),
            Factor::GitHubStars => Improvement::new(
                format!(
                    "Limited community engagement ({})",
                    plural(m.total_stars, "star", "stars")
                ),
                "Contribute to popular projects and create useful tools to gain stars",
            ),
            Factor::GitHubFollowers => Improvement::new(
                format!(
                    "Small follower network ({})",
                    plural(m.followers, "follower", "followers")
                ),
                "Engage with the community to increase your followers",
            ),
            Factor::GitHubActivity => Improvement::new(
                "Low recent activity on GitHub",
                "Maintain regular commits and update repositories frequently",
            ),
            Factor::GitHubLanguages => Improvement::new(
                "Limited programming language diversity",
                "Explore new programming languages and technologies",
            ),
            other => Improvement::new(
                format!("Low {}", other.label()),
                "Keep building on GitHub",
            ),
        }
    }

    fn notes(&self) -> PlatformNotes {
        let m = self.metrics;
        PlatformNotes::default()
            .metric("repos", m.public_repos)
            .metric("stars", m.total_stars)
            .metric("followers", m.followers)
            .metric("languages", m.language_count())
            .metric("top_languages", m.top_languages(TOP_LANGUAGES).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::LanguageShare;

    fn metrics() -> GitHubMetrics {
        GitHubMetrics {
            public_repos: 25,
            total_stars: 1,
            followers: 4,
            repos_updated_30d: 5,
            languages: ["Rust", "Go", "Python", "C", "Zig"]
                .iter()
                .enumerate()
                .map(|(i, name)| LanguageShare {
                    name: name.to_string(),
                    repos: 10 - i as u64,
                })
                .collect(),
        }
    }

    fn entry(factor: Factor) -> FactorScore {
        FactorScore {
            factor,
            score: 0.0,
            cap: factor.cap(),
            raw_value: 0,
        }
    }

    #[test]
    fn strengths_cite_raw_values() {
        let metrics = metrics();
        let rule = GitHubInsights::new(&metrics);
        assert_eq!(
            rule.strength(&entry(Factor::GitHubRepositories)),
            "Strong repository portfolio with 25 public repositories"
        );
        assert_eq!(
            rule.strength(&entry(Factor::GitHubLanguages)),
            "Versatile developer with 5 programming languages (Rust, Go, Python)"
        );
    }

    #[test]
    fn improvements_carry_tips() {
        let metrics = metrics();
        let rule = GitHubInsights::new(&metrics);
        let stars = rule.improvement(&entry(Factor::GitHubStars));
        assert_eq!(stars.text, "Limited community engagement (1 star)");
        assert!(stars.tip.contains("gain stars"));
    }

    #[test]
    fn notes_list_key_metrics() {
        let metrics = metrics();
        let notes = GitHubInsights::new(&metrics).notes();
        assert_eq!(notes.key_metrics["repos"], "25");
        assert_eq!(notes.key_metrics["top_languages"], "Rust, Go, Python");
        assert!(notes.tips.is_empty());
    }
}
