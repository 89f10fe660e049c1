//! The six fixed character attributes.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A character attribute.
///
/// The set is closed: every character carries exactly one score for each
/// variant, in the order of [`Attribute::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    Agility,
    Coordination,
    Strength,
    Insight,
    Reason,
    Will,
}

impl Attribute {
    /// Number of attributes on a sheet.
    pub const COUNT: usize = 6;

    /// All attributes in sheet order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Agility,
        Attribute::Coordination,
        Attribute::Strength,
        Attribute::Insight,
        Attribute::Reason,
        Attribute::Will,
    ];

    /// Position of this attribute in [`Attribute::ALL`].
    pub fn index(self) -> usize {
        match self {
            Attribute::Agility => 0,
            Attribute::Coordination => 1,
            Attribute::Strength => 2,
            Attribute::Insight => 3,
            Attribute::Reason => 4,
            Attribute::Will => 5,
        }
    }

    /// Upper-case key used in serialized sheets and translation tables.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Agility => "AGILITY",
            Attribute::Coordination => "COORDINATION",
            Attribute::Strength => "STRENGTH",
            Attribute::Insight => "INSIGHT",
            Attribute::Reason => "REASON",
            Attribute::Will => "WILL",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    /// Parses an attribute key, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AGILITY" => Ok(Attribute::Agility),
            "COORDINATION" => Ok(Attribute::Coordination),
            "STRENGTH" => Ok(Attribute::Strength),
            "INSIGHT" => Ok(Attribute::Insight),
            "REASON" => Ok(Attribute::Reason),
            "WILL" => Ok(Attribute::Will),
            _ => Err(DomainError::parse(format!(
                "Unknown attribute: '{}'. Valid values: AGILITY, COORDINATION, STRENGTH, \
                INSIGHT, REASON, WILL",
                s
            ))),
        }
    }
}
