//! Collector envelopes and the per-run platform input map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::RawPlatformData;
use crate::domain::foundation::Platform;

/// Why a platform was left out of a run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    #[error("collector reported failure: {message}")]
    CollectorFailed { message: String },

    #[error("payload belongs to {found}")]
    PlatformMismatch { found: Platform },

    #[error("payload could not be read: {message}")]
    InvalidPayload { message: String },
}

/// The envelope every collector returns: a success flag plus the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl CollectorReport {
    /// A successful report wrapping an already-built payload object.
    pub fn success(payload: serde_json::Value) -> Self {
        let payload = match payload {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Self {
            success: true,
            error: None,
            payload,
        }
    }

    /// A failed report carrying the collector's message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            payload: serde_json::Map::new(),
        }
    }

    /// Reads the payload as the given platform's raw contract.
    pub fn into_raw(self, platform: Platform) -> Result<RawPlatformData, SkipReason> {
        if !self.success {
            return Err(SkipReason::CollectorFailed {
                message: self
                    .error
                    .unwrap_or_else(|| "no success flag in report".to_string()),
            });
        }
        RawPlatformData::from_json(platform, serde_json::Value::Object(self.payload))
    }
}

/// What the host supplied for one platform.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformInput {
    Collected(RawPlatformData),
    Unavailable(SkipReason),
}

/// Per-run map of platform to collected data.
///
/// A platform with no entry was never scanned and is excluded without comment.
/// An `Unavailable` entry is excluded too, but its reason is kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformInputs {
    entries: BTreeMap<Platform, PlatformInput>,
}

impl PlatformInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds collected data under the platform it belongs to.
    pub fn with(mut self, data: RawPlatformData) -> Self {
        self.insert(data);
        self
    }

    pub fn insert(&mut self, data: RawPlatformData) {
        self.entries
            .insert(data.platform(), PlatformInput::Collected(data));
    }

    /// Records that a platform was attempted but produced nothing usable.
    pub fn mark_unavailable(&mut self, platform: Platform, reason: SkipReason) {
        self.entries
            .insert(platform, PlatformInput::Unavailable(reason));
    }

    /// Adds a collector envelope, downgrading any failure to a skip reason.
    pub fn insert_report(&mut self, platform: Platform, report: CollectorReport) {
        match report.into_raw(platform) {
            Ok(data) => self.insert(data),
            Err(reason) => self.mark_unavailable(platform, reason),
        }
    }

    pub fn get(&self, platform: Platform) -> Option<&PlatformInput> {
        self.entries.get(&platform)
    }

    /// Entries in canonical platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformInput)> {
        self.entries.iter().map(|(platform, input)| (*platform, input))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no entry holds collected data.
    pub fn has_no_usable_platform(&self) -> bool {
        !self
            .entries
            .values()
            .any(|input| matches!(input, PlatformInput::Collected(_)))
    }
}

impl From<BTreeMap<Platform, Option<RawPlatformData>>> for PlatformInputs {
    /// `None` values are treated as failed collections; payloads filed under the
    /// wrong key are rejected rather than re-homed.
    fn from(map: BTreeMap<Platform, Option<RawPlatformData>>) -> Self {
        let entries = map
            .into_iter()
            .map(|(platform, data)| {
                let input = match data {
                    Some(data) if data.platform() == platform => PlatformInput::Collected(data),
                    Some(data) => PlatformInput::Unavailable(SkipReason::PlatformMismatch {
                        found: data.platform(),
                    }),
                    None => PlatformInput::Unavailable(SkipReason::CollectorFailed {
                        message: "no data supplied".to_string(),
                    }),
                };
                (platform, input)
            })
            .collect();
        Self { entries }
    }
}
