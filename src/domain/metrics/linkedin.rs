//! LinkedIn collector contract and its normalized form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::{FieldIssue, FieldResolver, RawField};
use crate::domain::foundation::Platform;

/// Profile fields that count towards completeness.
pub const PROFILE_FIELDS: [&str; 4] = ["name", "headline", "location", "about"];

/// LinkedIn payload exactly as the scraper emits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedInRaw {
    pub profile: RawField<LinkedInProfile>,
    /// Positions, most recent first. Entry shape is collector-defined.
    pub experience: RawField<Vec<Value>>,
    pub education: RawField<Vec<Value>>,
    pub skills: RawField<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedInProfile {
    pub name: RawField<String>,
    pub headline: RawField<String>,
    pub location: RawField<String>,
    pub about: RawField<String>,
}

/// LinkedIn metrics with every default resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInMetrics {
    /// Number of non-blank fields among [`PROFILE_FIELDS`].
    pub filled_profile_fields: u64,
    /// Character count of the About section, 0 when absent.
    pub about_length: u64,
    pub experience_count: u64,
    pub education_count: u64,
    pub skill_count: u64,
}

impl LinkedInMetrics {
    pub fn profile_field_total(&self) -> u64 {
        PROFILE_FIELDS.len() as u64
    }

    pub fn profile_complete(&self) -> bool {
        self.filled_profile_fields >= self.profile_field_total()
    }
}

fn filled(field: &RawField<String>) -> bool {
    field.value().is_some_and(|text| !text.trim().is_empty())
}

fn entries(resolver: &mut FieldResolver, path: &str, field: &RawField<Vec<Value>>) -> u64 {
    resolver
        .get(path, field)
        .map(|items| items.iter().filter(|item| !item.is_null()).count() as u64)
        .unwrap_or(0)
}

impl LinkedInRaw {
    /// Resolves defaults once so scoring never sees a missing field.
    pub fn normalize(&self) -> (LinkedInMetrics, Vec<FieldIssue>) {
        let mut resolver = FieldResolver::new(Platform::LinkedIn);
        let mut metrics = LinkedInMetrics::default();

        // Blank profile fields are an expected state, not a data problem,
        // so only the section itself is tracked.
        if let Some(profile) = resolver.get("profile", &self.profile) {
            metrics.filled_profile_fields = [
                &profile.name,
                &profile.headline,
                &profile.location,
                &profile.about,
            ]
            .into_iter()
            .filter(|field| filled(field))
            .count() as u64;
            metrics.about_length = profile
                .about
                .value()
                .map(|about| about.trim().chars().count() as u64)
                .unwrap_or(0);
        }

        metrics.experience_count = entries(&mut resolver, "experience", &self.experience);
        metrics.education_count = entries(&mut resolver, "education", &self.education);
        metrics.skill_count = entries(&mut resolver, "skills", &self.skills);

        (metrics, resolver.into_issues())
    }
}
