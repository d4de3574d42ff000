//! GitHub collector contract and its normalized form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::{FieldIssue, FieldResolver, RawField};
use crate::domain::foundation::Platform;

/// GitHub payload exactly as the collector emits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubRaw {
    pub statistics: RawField<GitHubStatistics>,
    pub repositories: RawField<GitHubRepositories>,
    /// Language name to number of repositories using it.
    pub languages: RawField<BTreeMap<String, RawField<u64>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubStatistics {
    pub public_repos: RawField<u64>,
    pub total_stars: RawField<u64>,
    pub followers: RawField<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubRepositories {
    pub recent_activity: RawField<GitHubRecentActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubRecentActivity {
    /// Repositories pushed to in the last 30 days.
    pub repos_updated: RawField<u64>,
}

/// A language and the number of repositories written in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub repos: u64,
}

/// GitHub metrics with every default resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubMetrics {
    pub public_repos: u64,
    pub total_stars: u64,
    pub followers: u64,
    pub repos_updated_30d: u64,
    /// Most used first; ties broken by name.
    pub languages: Vec<LanguageShare>,
}

impl GitHubMetrics {
    pub fn language_count(&self) -> u64 {
        self.languages.len() as u64
    }

    /// Names of the most used languages, at most `limit`.
    pub fn top_languages(&self, limit: usize) -> Vec<&str> {
        self.languages
            .iter()
            .take(limit)
            .map(|share| share.name.as_str())
            .collect()
    }
}

impl GitHubRaw {
    /// Resolves defaults once so scoring never sees a missing field.
    pub fn normalize(&self) -> (GitHubMetrics, Vec<FieldIssue>) {
        let mut resolver = FieldResolver::new(Platform::GitHub);

        let (public_repos, total_stars, followers) =
            match resolver.get("statistics", &self.statistics) {
                Some(stats) => (
                    resolver.count("statistics.public_repos", &stats.public_repos),
                    resolver.count("statistics.total_stars", &stats.total_stars),
                    resolver.count("statistics.followers", &stats.followers),
                ),
                None => (0, 0, 0),
            };

        let repos_updated_30d = resolver
            .get("repositories", &self.repositories)
            .and_then(|repos| {
                resolver.get("repositories.recent_activity", &repos.recent_activity)
            })
            .map(|recent| {
                resolver.count("repositories.recent_activity.repos_updated", &recent.repos_updated)
            })
            .unwrap_or(0);

        let mut languages: Vec<LanguageShare> = resolver
            .get("languages", &self.languages)
            .map(|langs| {
                langs
                    .iter()
                    .map(|(name, repos)| LanguageShare {
                        name: name.clone(),
                        repos: repos.value().copied().unwrap_or(0),
                    })
                    .collect()
            })
            .unwrap_or_default();
        languages.sort_by(|a, b| b.repos.cmp(&a.repos).then_with(|| a.name.cmp(&b.name)));

        let metrics = GitHubMetrics {
            public_repos,
            total_stars,
            followers,
            repos_updated_30d,
            languages,
        };
        (metrics, resolver.into_issues())
    }
}
