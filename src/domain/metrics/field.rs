//! Tri-state raw field wrapper and the diagnostics recorded while resolving it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::Platform;

/// A single value as supplied by a collector.
///
/// Deserialization never fails: `null` or an absent key becomes `Missing`, a
/// value of the wrong shape becomes `Malformed`. That keeps one bad field from
/// discarding the rest of a platform payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RawField<T> {
    Missing,
    Malformed(String),
    Present(T),
}

impl<T> RawField<T> {
    /// Returns the value when present.
    pub fn value(&self) -> Option<&T> {
        match self {
            RawField::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawField::Missing)
    }

    /// Classifies the field for diagnostics; `None` when it is usable.
    pub fn issue_kind(&self) -> Option<FieldIssueKind> {
        match self {
            RawField::Present(_) => None,
            RawField::Missing => Some(FieldIssueKind::Missing),
            RawField::Malformed(_) => Some(FieldIssueKind::Malformed),
        }
    }
}

impl<T: DeserializeOwned> RawField<T> {
    /// Interprets an arbitrary JSON value as this field.
    pub fn from_json(value: serde_json::Value) -> Self {
        if value.is_null() {
            return RawField::Missing;
        }
        match serde_json::from_value::<T>(value) {
            Ok(parsed) => RawField::Present(parsed),
            Err(err) => RawField::Malformed(err.to_string()),
        }
    }
}

impl<T> Default for RawField<T> {
    fn default() -> Self {
        RawField::Missing
    }
}

impl<T> From<T> for RawField<T> {
    fn from(value: T) -> Self {
        RawField::Present(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for RawField<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(RawField::from_json(value))
    }
}

impl<T: Serialize> Serialize for RawField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawField::Present(value) => value.serialize(serializer),
            RawField::Missing | RawField::Malformed(_) => serializer.serialize_none(),
        }
    }
}

/// Why a field contributed zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIssueKind {
    Missing,
    Malformed,
}

/// A raw field that was substituted with its default during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldIssue {
    pub platform: Platform,
    /// Dotted path of the field in the collector payload.
    pub field: String,
    pub kind: FieldIssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            FieldIssueKind::Missing => "missing",
            FieldIssueKind::Malformed => "malformed",
        };
        write!(f, "{} field '{}' is {}", self.platform, self.field, kind)
    }
}

/// Resolves raw fields for one platform, recording every substitution.
pub(crate) struct FieldResolver {
    platform: Platform,
    issues: Vec<FieldIssue>,
}

impl FieldResolver {
    pub(crate) fn new(platform: Platform) -> Self {
        Self {
            platform,
            issues: Vec::new(),
        }
    }

    /// Returns the field value, or records why it is unusable.
    pub(crate) fn get<'f, T>(&mut self, path: &str, field: &'f RawField<T>) -> Option<&'f T> {
        if let Some(kind) = field.issue_kind() {
            tracing::debug!(
                platform = %self.platform,
                field = path,
                ?kind,
                "Substituting default for raw field"
            );
            self.issues.push(FieldIssue {
                platform: self.platform,
                field: path.to_string(),
                kind,
            });
        }
        field.value()
    }

    /// Count-style leaf: unusable values contribute zero.
    pub(crate) fn count(&mut self, path: &str, field: &RawField<u64>) -> u64 {
        self.get(path, field).copied().unwrap_or(0)
    }

    /// Vote-style leaf: unusable or negative sums contribute zero.
    pub(crate) fn non_negative(&mut self, path: &str, field: &RawField<i64>) -> u64 {
        self.get(path, field)
            .map(|value| (*value).max(0) as u64)
            .unwrap_or(0)
    }

    pub(crate) fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_field_reads_present_value() {
        let field: RawField<u64> = serde_json::from_value(json!(15)).unwrap();
        assert_eq!(field, RawField::Present(15));
    }

    #[test]
    fn raw_field_treats_null_as_missing() {
        let field: RawField<u64> = serde_json::from_value(json!(null)).unwrap();
        assert!(field.is_missing());
    }

    #[test]
    fn raw_field_absorbs_wrong_shape() {
        let field: RawField<u64> = serde_json::from_value(json!("fifteen")).unwrap();
        assert!(matches!(field, RawField::Malformed(_)));
        assert_eq!(field.issue_kind(), Some(FieldIssueKind::Malformed));
    }

    #[test]
    fn raw_field_rejects_negative_counts_as_malformed() {
        let field: RawField<u64> = serde_json::from_value(json!(-4)).unwrap();
        assert!(matches!(field, RawField::Malformed(_)));
    }

    #[test]
    fn resolver_records_each_substitution() {
        let mut resolver = FieldResolver::new(Platform::GitHub);
        assert_eq!(resolver.count("statistics.followers", &RawField::Present(7)), 7);
        assert_eq!(resolver.count("statistics.total_stars", &RawField::Missing), 0);
        assert_eq!(
            resolver.count("statistics.public_repos", &RawField::Malformed("bad".into())),
            0
        );

        let issues = resolver.into_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "statistics.total_stars");
        assert_eq!(issues[0].kind, FieldIssueKind::Missing);
        assert_eq!(issues[1].kind, FieldIssueKind::Malformed);
    }

    #[test]
    fn resolver_clamps_negative_votes() {
        let mut resolver = FieldResolver::new(Platform::StackOverflow);
        assert_eq!(resolver.non_negative("activity.answers.score", &RawField::Present(-12)), 0);
        assert_eq!(resolver.non_negative("activity.answers.score", &RawField::Present(40)), 40);
        assert!(resolver.into_issues().is_empty());
    }

    #[test]
    fn field_issue_display() {
        let issue = FieldIssue {
            platform: Platform::LinkedIn,
            field: "skills".to_string(),
            kind: FieldIssueKind::Malformed,
        };
        assert_eq!(issue.to_string(), "LinkedIn field 'skills' is malformed");
    }
}
