//! Static collector for tests and replays.
//!
//! Returns a fixed report on every call and counts how often it was asked.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::foundation::Platform;
use crate::domain::metrics::CollectorReport;
use crate::ports::MetricsCollector;

#[derive(Debug, Clone)]
pub struct StaticCollector {
    platform: Platform,
    report: CollectorReport,
    calls: Arc<AtomicUsize>,
}

impl StaticCollector {
    /// A collector that always succeeds with the given payload object.
    pub fn with_payload(platform: Platform, payload: serde_json::Value) -> Self {
        Self::with_report(platform, CollectorReport::success(payload))
    }

    /// A collector that always fails with the given message.
    pub fn failing(platform: Platform, message: impl Into<String>) -> Self {
        Self::with_report(platform, CollectorReport::failure(message))
    }

    pub fn with_report(platform: Platform, report: CollectorReport) -> Self {
        Self {
            platform,
            report,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `collect` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MetricsCollector for StaticCollector {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn collect(&self) -> CollectorReport {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.report.clone()
    }
}
