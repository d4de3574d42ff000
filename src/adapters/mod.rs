//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `collectors` - Static and file-backed metrics collectors

pub mod collectors;

pub use collectors::{JsonFileCollector, StaticCollector};
