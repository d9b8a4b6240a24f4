//! Core data model types for pwstrength.
//!
//! These are the rules a candidate is checked against, the result of checking
//! it, and the presentation tiers derived from that result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest score a candidate can reach (one point per rule).
pub const MAX_SCORE: u8 = 4;

/// One of the four fixed character-class rules.
///
/// Variants are declared in evaluation order; deficiency lists follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// At least 8 characters.
    Length,
    /// At least one `A-Z` and at least one `a-z`.
    CaseMix,
    /// At least one `0-9`.
    Digit,
    /// At least one of `!@#$%^&*`.
    Special,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Rule; 4] = [Rule::Length, Rule::CaseMix, Rule::Digit, Rule::Special];

    /// Message shown when a candidate fails this rule.
    pub fn deficiency(self) -> &'static str {
        match self {
            Rule::Length => "Password should be at least 8 characters long.",
            Rule::CaseMix => {
                "Password should contain both uppercase and lowercase letters (A-Z, a-z)."
            }
            Rule::Digit => "Password should contain at least one number (0-9).",
            Rule::Special => "Password should contain at least one special character (!@#$%^&*).",
        }
    }

    /// Short label for the criteria list shown before anything is submitted.
    pub fn criterion(self) -> &'static str {
        match self {
            Rule::Length => "Minimum 8 characters",
            Rule::CaseMix => "Uppercase and lowercase letters (A-Z, a-z)",
            Rule::Digit => "At least one number (0-9)",
            Rule::Special => "At least one special character (!@#$%^&*)",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Length => write!(f, "length"),
            Rule::CaseMix => write!(f, "case_mix"),
            Rule::Digit => write!(f, "digit"),
            Rule::Special => write!(f, "special"),
        }
    }
}

/// Presentation tier derived from a score.
///
/// Scores 0 through 2 are all weak; only 3 is moderate and only 4 is strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Weak,
    Moderate,
    Strong,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        match score {
            4..=u8::MAX => Tier::Strong,
            3 => Tier::Moderate,
            _ => Tier::Weak,
        }
    }

    /// Verdict line shown after a check.
    pub fn verdict(self) -> &'static str {
        match self {
            Tier::Strong => "Your password is strong!",
            Tier::Moderate => "Your password is moderate",
            Tier::Weak => "Your password is weak!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Weak => write!(f, "weak"),
            Tier::Moderate => write!(f, "moderate"),
            Tier::Strong => write!(f, "strong"),
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weak" => Ok(Tier::Weak),
            "moderate" | "medium" => Ok(Tier::Moderate),
            "strong" => Ok(Tier::Strong),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

/// Colour band of the strength meter.
///
/// This is not the tier: a score of 2 is orange but weak, and a score of 3
/// is green but moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeterBand {
    Red,
    Orange,
    Green,
}

impl MeterBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => MeterBand::Red,
            2 => MeterBand::Orange,
            _ => MeterBand::Green,
        }
    }

    /// CSS hex colour for this band.
    pub fn hex(self) -> &'static str {
        match self {
            MeterBand::Red => "#e74c3c",
            MeterBand::Orange => "#f39c12",
            MeterBand::Green => "#2ecc71",
        }
    }
}

/// Result of checking one candidate against every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Number of satisfied rules, 0 through 4.
    pub score: u8,
    /// Rules the candidate failed, in evaluation order.
    pub failed: Vec<Rule>,
}

impl Assessment {
    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score)
    }

    pub fn meter_band(&self) -> MeterBand {
        MeterBand::from_score(self.score)
    }

    /// Meter fill, 0 to 100.
    pub fn percent(&self) -> u8 {
        (u16::from(self.score.min(MAX_SCORE)) * 100 / u16::from(MAX_SCORE)) as u8
    }

    /// Failure messages in evaluation order; empty when every rule passed.
    pub fn deficiencies(&self) -> Vec<&'static str> {
        self.failed.iter().map(|r| r.deficiency()).collect()
    }

    pub fn satisfies(&self, rule: Rule) -> bool {
        !self.failed.contains(&rule)
    }
}
