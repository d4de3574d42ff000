//! Platform enum identifying each supported professional profile source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// External profile platforms the engine knows how to score.
///
/// Ordering follows the canonical pipeline order, which is also the order
/// used for `platforms_analyzed` and every per-platform listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "GitHub")]
    GitHub,
    #[serde(rename = "StackOverflow")]
    StackOverflow,
    #[serde(rename = "LinkedIn")]
    LinkedIn,
}

impl Platform {
    /// Returns all platforms in canonical order.
    pub fn ordered() -> [Platform; 3] {
        [Platform::GitHub, Platform::StackOverflow, Platform::LinkedIn]
    }

    /// Returns the display label for this platform.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::StackOverflow => "StackOverflow",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Returns the snake_case key used in configuration and collector payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::GitHub => "github",
            Platform::StackOverflow => "stackoverflow",
            Platform::LinkedIn => "linkedin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-', ' '], "").as_str() {
            "github" => Ok(Platform::GitHub),
            "stackoverflow" | "so" => Ok(Platform::StackOverflow),
            "linkedin" => Ok(Platform::LinkedIn),
            _ => Err(ValidationError::UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_ordered_is_canonical() {
        assert_eq!(
            Platform::ordered(),
            [Platform::GitHub, Platform::StackOverflow, Platform::LinkedIn]
        );
    }

    #[test]
    fn platform_parses_common_spellings() {
        assert_eq!("GitHub".parse::<Platform>().unwrap(), Platform::GitHub);
        assert_eq!("stack_overflow".parse::<Platform>().unwrap(), Platform::StackOverflow);
        assert_eq!("Stack Overflow".parse::<Platform>().unwrap(), Platform::StackOverflow);
        assert_eq!(" linkedin ".parse::<Platform>().unwrap(), Platform::LinkedIn);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_serializes_with_display_label() {
        let json = serde_json::to_string(&Platform::StackOverflow).unwrap();
        assert_eq!(json, "\"StackOverflow\"");
        let back: Platform = serde_json::from_str("\"LinkedIn\"").unwrap();
        assert_eq!(back, Platform::LinkedIn);
    }
}
