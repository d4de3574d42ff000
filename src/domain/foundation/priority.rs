//! Priority level shared by recommendations and action items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level for guidance, most urgent first.
///
/// The derived `Ord` places `Critical` before `Low`, so an ascending sort
/// yields the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// True for priorities that belong in a short "act now" list.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::Critical | Priority::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
