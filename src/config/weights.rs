//! Platform combination weights

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::domain::foundation::Platform;

/// Relative weight of each platform in the overall score.
///
/// Weights are integer parts rather than fractions so that renormalizing over
/// the present platforms is exact: a lone platform's overall equals its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationWeights {
    #[serde(default = "default_github")]
    pub github: u32,

    #[serde(default = "default_stackoverflow")]
    pub stackoverflow: u32,

    #[serde(default = "default_linkedin")]
    pub linkedin: u32,
}

impl CombinationWeights {
    pub fn weight(&self, platform: Platform) -> u32 {
        match platform {
            Platform::GitHub => self.github,
            Platform::StackOverflow => self.stackoverflow,
            Platform::LinkedIn => self.linkedin,
        }
    }

    pub fn total(&self) -> u32 {
        self.github + self.stackoverflow + self.linkedin
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total() == 0 {
            return Err(ValidationError::ZeroWeightTotal);
        }
        Ok(())
    }
}

impl Default for CombinationWeights {
    fn default() -> Self {
        Self {
            github: default_github(),
            stackoverflow: default_stackoverflow(),
            linkedin: default_linkedin(),
        }
    }
}

fn default_github() -> u32 {
    35
}

fn default_stackoverflow() -> u32 {
    35
}

fn default_linkedin() -> u32 {
    30
}
