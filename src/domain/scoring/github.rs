//! GitHub scorer: portfolio size, recognition, network, recent activity, and breadth.

use crate::config::GitHubTargets;
use crate::domain::foundation::Platform;
use crate::domain::metrics::GitHubMetrics;

use super::factor::{Factor, SubScore};
use super::formula::linear;
use super::scorer::{Breakdown, PlatformScorer};

pub struct GitHubScorer<'a> {
    targets: &'a GitHubTargets,
}

impl<'a> GitHubScorer<'a> {
    pub fn new(targets: &'a GitHubTargets) -> Self {
        Self { targets }
    }
}

impl PlatformScorer for GitHubScorer<'_> {
    type Metrics = GitHubMetrics;

    fn platform(&self) -> Platform {
        Platform::GitHub
    }

    fn score(&self, metrics: &GitHubMetrics) -> SubScore {
        let t = self.targets;
        let factor = |factor: Factor, value: u64, target: f64| {
            (factor, linear(value as f64, target, factor.cap()), value)
        };

        [
            factor(Factor::GitHubRepositories, metrics.public_repos, t.repositories),
            factor(Factor::GitHubStars, metrics.total_stars, t.stars),
            factor(Factor::GitHubFollowers, metrics.followers, t.followers),
            factor(
                Factor::GitHubActivity,
                metrics.repos_updated_30d,
                t.recent_repositories,
            ),
            factor(Factor::GitHubLanguages, metrics.language_count(), t.languages),
        ]
        .into_iter()
        .fold(Breakdown::new(Platform::GitHub), |acc, (f, points, raw)| {
            acc.add(f, points, raw)
        })
        .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::LanguageShare;

    fn languages(names: &[&str]) -> Vec<LanguageShare> {
        names
            .iter()
            .map(|name| LanguageShare {
                name: name.to_string(),
                repos: 1,
            })
            .collect()
    }

    #[test]
    fn scores_a_typical_profile() {
        let targets = GitHubTargets::default();
        let metrics = GitHubMetrics {
            public_repos: 15,
            total_stars: 120,
            followers: 50,
            repos_updated_30d: 3,
            languages: languages(&["Python", "JavaScript", "Go"]),
        };

        let sub_score = GitHubScorer::new(&targets).score(&metrics);

        assert_eq!(sub_score.factor_score(Factor::GitHubRepositories), 15.0);
        assert_eq!(sub_score.factor_score(Factor::GitHubStars), 25.0);
        assert_eq!(sub_score.factor_score(Factor::GitHubFollowers), 10.0);
        assert_eq!(sub_score.factor_score(Factor::GitHubActivity), 12.0);
        assert_eq!(sub_score.factor_score(Factor::GitHubLanguages), 9.0);
        assert_eq!(sub_score.total.value(), 71);
        assert_eq!(
            sub_score.factor(Factor::GitHubStars).map(|f| f.raw_value),
            Some(120)
        );
    }

    #[test]
    fn saturates_at_100() {
        let targets = GitHubTargets::default();
        let metrics = GitHubMetrics {
            public_repos: 200,
            total_stars: 10_000,
            followers: 5_000,
            repos_updated_30d: 40,
            languages: languages(&["a", "b", "c", "d", "e", "f", "g"]),
        };
        let sub_score = GitHubScorer::new(&targets).score(&metrics);
        assert_eq!(sub_score.total.value(), 100);
    }

    #[test]
    fn custom_targets_change_the_slope() {
        let targets = GitHubTargets {
            stars: 1000.0,
            ..GitHubTargets::default()
        };
        let metrics = GitHubMetrics {
            total_stars: 100,
            ..GitHubMetrics::default()
        };
        let sub_score = GitHubScorer::new(&targets).score(&metrics);
        assert_eq!(sub_score.factor_score(Factor::GitHubStars), 2.5);
    }
}
