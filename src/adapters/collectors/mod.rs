//! Collector adapters - ready-made `MetricsCollector` implementations.

mod json_file;
mod static_collector;

pub use json_file::JsonFileCollector;
pub use static_collector::StaticCollector;
