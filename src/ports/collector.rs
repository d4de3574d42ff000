//! Collector port - where raw platform metrics come from.
//!
//! Collectors own all network and scraping concerns. The engine only sees the
//! report envelope they hand back, so a collector that fails must still
//! return a report (with `success: false`) rather than an error.
//!
//! # Example
//!
//! ```ignore
//! use footprint_insights::ports::MetricsCollector;
//!
//! let collectors: Vec<&dyn MetricsCollector> = vec![&github, &stackoverflow];
//! let result = analyzer.collect_and_analyze(&collectors);
//! ```

use crate::domain::foundation::Platform;
use crate::domain::metrics::CollectorReport;

/// Port for acquiring one platform's raw metrics.
///
/// Implementations may block; the engine calls `collect` once per run.
pub trait MetricsCollector: Send + Sync {
    /// The platform this collector reports on.
    fn platform(&self) -> Platform;

    /// Fetches the current metrics.
    ///
    /// Failures are reported through [`CollectorReport::failure`].
    fn collect(&self) -> CollectorReport;
}
