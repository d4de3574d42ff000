//! Error types for value-object construction.

use thiserror::Error;

/// Raised when a primitive cannot be built from the given input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("score {value} is outside 0..=100")]
    ScoreOutOfRange { value: u8 },

    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),
}
