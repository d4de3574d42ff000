//! Application layer - The analysis pipeline and its result.
//!
//! `FootprintAnalyzer` orchestrates the domain stages in order and returns an
//! `AnalysisResult`. It is synchronous and holds no mutable state.

mod analyzer;
mod result;

pub use analyzer::FootprintAnalyzer;
pub use result::{AnalysisResult, Diagnostics, FootprintSummary, SCHEMA_VERSION};
