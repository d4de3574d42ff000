//! Metrics module - The raw contract each collector must satisfy and the
//! adapter that turns it into fully resolved metrics.
//!
//! Raw payloads keep every field as a [`RawField`] so that missing or
//! malformed values survive deserialization. `normalize` is the single place
//! where defaults are chosen; scoring only ever sees the normalized structs.

mod field;
mod github;
mod linkedin;
mod report;
mod stackoverflow;

pub use field::{FieldIssue, FieldIssueKind, RawField};
pub use github::{
    GitHubMetrics, GitHubRaw, GitHubRecentActivity, GitHubRepositories, GitHubStatistics,
    LanguageShare,
};
pub use linkedin::{LinkedInMetrics, LinkedInProfile, LinkedInRaw, PROFILE_FIELDS};
pub use report::{CollectorReport, PlatformInput, PlatformInputs, SkipReason};
pub use stackoverflow::{
    SoActivity, SoAnswers, SoBadges, SoQuestions, SoReputation, SoTag, SoTags,
    StackOverflowMetrics, StackOverflowRaw, TagShare,
};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Platform;

/// Collector output for one platform, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "data")]
pub enum RawPlatformData {
    GitHub(GitHubRaw),
    StackOverflow(StackOverflowRaw),
    LinkedIn(LinkedInRaw),
}

impl RawPlatformData {
    pub fn platform(&self) -> Platform {
        match self {
            RawPlatformData::GitHub(_) => Platform::GitHub,
            RawPlatformData::StackOverflow(_) => Platform::StackOverflow,
            RawPlatformData::LinkedIn(_) => Platform::LinkedIn,
        }
    }

    /// Reads a collector payload object as the given platform's contract.
    pub fn from_json(platform: Platform, payload: serde_json::Value) -> Result<Self, SkipReason> {
        let invalid = |err: serde_json::Error| SkipReason::InvalidPayload {
            message: err.to_string(),
        };
        let data = match platform {
            Platform::GitHub => RawPlatformData::GitHub(serde_json::from_value(payload).map_err(invalid)?),
            Platform::StackOverflow => {
                RawPlatformData::StackOverflow(serde_json::from_value(payload).map_err(invalid)?)
            }
            Platform::LinkedIn => {
                RawPlatformData::LinkedIn(serde_json::from_value(payload).map_err(invalid)?)
            }
        };
        Ok(data)
    }

    /// Runs the platform's adapter, returning metrics plus any substituted fields.
    pub fn normalize(&self) -> (NormalizedMetrics, Vec<FieldIssue>) {
        match self {
            RawPlatformData::GitHub(raw) => {
                let (metrics, issues) = raw.normalize();
                (NormalizedMetrics::GitHub(metrics), issues)
            }
            RawPlatformData::StackOverflow(raw) => {
                let (metrics, issues) = raw.normalize();
                (NormalizedMetrics::StackOverflow(metrics), issues)
            }
            RawPlatformData::LinkedIn(raw) => {
                let (metrics, issues) = raw.normalize();
                (NormalizedMetrics::LinkedIn(metrics), issues)
            }
        }
    }
}

/// Fully resolved metrics for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "metrics")]
pub enum NormalizedMetrics {
    GitHub(GitHubMetrics),
    StackOverflow(StackOverflowMetrics),
    LinkedIn(LinkedInMetrics),
}

impl NormalizedMetrics {
    pub fn platform(&self) -> Platform {
        match self {
            NormalizedMetrics::GitHub(_) => Platform::GitHub,
            NormalizedMetrics::StackOverflow(_) => Platform::StackOverflow,
            NormalizedMetrics::LinkedIn(_) => Platform::LinkedIn,
        }
    }
}
