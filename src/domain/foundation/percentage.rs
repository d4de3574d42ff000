//! Percentage value object (0-100 scale) used for platform sub-score totals.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Clamps anything above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Rejects values above 100 instead of clamping.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::ScoreOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Rounds a fractional score to the nearest whole percent.
    ///
    /// Non-finite and negative inputs collapse to zero; anything above 100 clamps.
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() || score <= 0.0 {
            return Self::ZERO;
        }
        Self(score.round().min(100.0) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float for weighted arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}
