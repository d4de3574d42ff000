//! Scoring module - Platform scorers and the overall score combiner.
//!
//! Each platform maps its normalized metrics onto a fixed, ordered list of
//! capped factors whose caps sum to 100. The combiner merges the present
//! platforms into one overall score and labels everything with the shared
//! rating table.

mod combiner;
mod factor;
mod formula;
mod github;
mod linkedin;
mod scorer;
mod stackoverflow;

pub use combiner::{CombinedScore, ScoreCombiner};
pub use factor::{Factor, FactorScore, FactorThresholds, SubScore};
pub use formula::{linear, logarithmic};
pub use github::GitHubScorer;
pub use linkedin::LinkedInScorer;
pub use scorer::{score_platform, PlatformScorer};
pub use stackoverflow::StackOverflowScorer;
