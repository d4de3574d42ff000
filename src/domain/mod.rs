//! Domain layer containing the scoring logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `metrics` - Raw collector contracts and their normalization
//! - `scoring` - Per-platform scorers and the overall combiner
//! - `insights` - Strength and improvement findings per factor
//! - `recommendations` - Ordered recommendation rules
//! - `plan` - The 30-day action plan

pub mod foundation;
pub mod insights;
pub mod metrics;
pub mod plan;
pub mod recommendations;
pub mod scoring;
