//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MetricsCollector` - Supplies one platform's collector report

mod collector;

pub use collector::MetricsCollector;
