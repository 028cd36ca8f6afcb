//! Strength classification from entropy bits.

use serde::Serialize;
use std::fmt;

/// Coarse strength level for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Classifies entropy using half-open intervals of 20 bits from 30.
    pub fn from_entropy(bits: f64) -> Self {
        if bits >= 90.0 {
            StrengthLevel::VeryStrong
        } else if bits >= 70.0 {
            StrengthLevel::Strong
        } else if bits >= 50.0 {
            StrengthLevel::Good
        } else if bits >= 30.0 {
            StrengthLevel::Fair
        } else {
            StrengthLevel::Weak
        }
    }

    /// Meter fill percentage for this level.
    pub fn percent(self) -> u8 {
        match self {
            StrengthLevel::Weak => 20,
            StrengthLevel::Fair => 40,
            StrengthLevel::Good => 60,
            StrengthLevel::Strong => 80,
            StrengthLevel::VeryStrong => 100,
        }
    }

    /// Kebab-case name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Good => "good",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
