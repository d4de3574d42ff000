//! Insight band configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::ValidationError;
use crate::domain::scoring::{Factor, FactorThresholds};

/// Per-factor insight bands. Factors without an override use their built-in bands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    #[serde(default)]
    pub factors: BTreeMap<Factor, FactorThresholds>,
}

impl InsightThresholds {
    /// Effective bands for a factor.
    pub fn for_factor(&self, factor: Factor) -> FactorThresholds {
        self.factors
            .get(&factor)
            .copied()
            .unwrap_or_else(|| factor.default_thresholds())
    }

    /// Every factor must keep a silent band between improvement and strength,
    /// so the two polarities can never both fire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for factor in Factor::all() {
            let bands = self.for_factor(factor);
            let invalid = |reason| ValidationError::InvalidThresholds { factor, reason };
            if !bands.strength.is_finite() || !bands.improvement.is_finite() {
                return Err(invalid("bands must be finite"));
            }
            if bands.improvement < 0.0 {
                return Err(invalid("improvement band is negative"));
            }
            if bands.strength <= bands.improvement {
                return Err(invalid("strength band must exceed improvement band"));
            }
            if bands.strength > factor.cap() {
                return Err(invalid("strength band exceeds the factor cap"));
            }
        }
        Ok(())
    }
}
