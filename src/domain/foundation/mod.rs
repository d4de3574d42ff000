//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the vocabulary
//! of the footprint scoring domain.

mod errors;
mod percentage;
mod platform;
mod priority;
mod rating;
mod timestamp;

pub use errors::ValidationError;
pub use percentage::Percentage;
pub use platform::Platform;
pub use priority::Priority;
pub use rating::ScoreRating;
pub use timestamp::Timestamp;
