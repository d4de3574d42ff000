//! Collector that replays a saved collector report from a JSON file.
//!
//! Hosts that run collection separately (or cache it) can point the engine
//! at the saved output. Read or parse failures become failed reports.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::foundation::Platform;
use crate::domain::metrics::CollectorReport;
use crate::ports::MetricsCollector;

#[derive(Debug, Clone)]
pub struct JsonFileCollector {
    platform: Platform,
    path: PathBuf,
}

impl JsonFileCollector {
    pub fn new(platform: Platform, path: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricsCollector for JsonFileCollector {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn collect(&self) -> CollectorReport {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(
                    platform = %self.platform,
                    path = %self.path.display(),
                    error = %err,
                    "could not read saved collector report"
                );
                return CollectorReport::failure(format!(
                    "could not read {}: {}",
                    self.path.display(),
                    err
                ));
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(
                platform = %self.platform,
                path = %self.path.display(),
                error = %err,
                "saved collector report is not valid JSON"
            );
            CollectorReport::failure(format!("invalid report in {}: {}", self.path.display(), err))
        })
    }
}
