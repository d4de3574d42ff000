//! Footprint Insights - Professional footprint scoring engine
//!
//! This crate turns collected GitHub, Stack Overflow, and LinkedIn metrics
//! into platform scores, an overall score, insights, recommendations, and a
//! 30-day action plan.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use application::{AnalysisResult, FootprintAnalyzer, FootprintSummary};
pub use config::EngineConfig;
pub use domain::metrics::{PlatformInputs, RawPlatformData};
