//! Role level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of role levels a user can hold within a pole.
///
/// Lower numbers mean more privilege. Any stored value outside `1..=5`
/// has no corresponding variant and grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleLevel {
    /// Level 1: chief executive.
    Ceo,
    /// Level 2: member of the executive committee.
    ExecutiveCommittee,
    /// Level 3: head of the pole.
    PoleHead,
    /// Level 4: senior contributor.
    SeniorContributor,
    /// Level 5: standard contributor.
    StandardContributor,
}

impl RoleLevel {
    /// All defined levels, most privileged first.
    pub const ALL: [RoleLevel; 5] = [
        Self::Ceo,
        Self::ExecutiveCommittee,
        Self::PoleHead,
        Self::SeniorContributor,
        Self::StandardContributor,
    ];

    /// Map a raw stored level to a defined level, if any.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Ceo),
            2 => Some(Self::ExecutiveCommittee),
            3 => Some(Self::PoleHead),
            4 => Some(Self::SeniorContributor),
            5 => Some(Self::StandardContributor),
            _ => None,
        }
    }

    /// Return the raw integer value stored for this level.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Ceo => 1,
            Self::ExecutiveCommittee => 2,
            Self::PoleHead => 3,
            Self::SeniorContributor => 4,
            Self::StandardContributor => 5,
        }
    }

    /// Human-readable title for the level.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::ExecutiveCommittee => "Executive committee",
            Self::PoleHead => "Pole head",
            Self::SeniorContributor => "Senior contributor",
            Self::StandardContributor => "Standard contributor",
        }
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.title())
    }
}

impl TryFrom<i32> for RoleLevel {
    type Error = mkb_core::AppError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or_else(|| {
            mkb_core::AppError::validation(format!(
                "Invalid role level: {raw}. Expected a value between 1 and 5"
            ))
        })
    }
}
