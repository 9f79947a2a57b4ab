//! Strength report types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete strength level derived from a score.
///
/// Variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    /// Score below 20.
    #[serde(rename = "Very Weak")]
    VeryWeak,
    /// Score 20 to 39.
    Weak,
    /// Score 40 to 59.
    Fair,
    /// Score 60 to 74.
    Good,
    /// Score 75 to 89.
    Strong,
    /// Score 90 and above.
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLevel {
    /// All levels, weakest first.
    pub const ALL: [StrengthLevel; 6] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Good,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
    ];

    /// Maps a clamped score to its level. Lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => StrengthLevel::VeryStrong,
            75..=89 => StrengthLevel::Strong,
            60..=74 => StrengthLevel::Good,
            40..=59 => StrengthLevel::Fair,
            20..=39 => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of analyzing one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Heuristic score in `[0, 100]`.
    pub score: u8,
    /// Level derived from `score`.
    pub level: StrengthLevel,
    /// Ordered suggestions; never empty.
    pub feedback: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(19), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(20), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(40), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(74), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(75), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(90), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_levels_ordered() {
        assert!(StrengthLevel::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_labels_serialize_with_spaces() {
        let json = serde_json::to_string(&StrengthLevel::VeryStrong).unwrap();
        assert_eq!(json, "\"Very Strong\"");
        assert_eq!(StrengthLevel::VeryWeak.to_string(), "Very Weak");
    }
}
