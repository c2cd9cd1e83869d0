//! Capability triple and individual capabilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single capability that can be required of a pole access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// View the pole's data.
    Read,
    /// Create or modify the pole's data.
    Write,
    /// Administer the pole.
    Manage,
}

impl Capability {
    /// Return the capability as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Manage => "manage",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Capability {
    type Err = mkb_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "manage" => Ok(Self::Manage),
            _ => Err(mkb_core::AppError::validation(format!(
                "Invalid capability: '{s}'. Expected one of: read, write, manage"
            ))),
        }
    }
}

/// The derived `{can_read, can_write, can_manage}` permission set.
///
/// Each flag is independent; no ordering between them is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// May view.
    pub can_read: bool,
    /// May create or modify.
    pub can_write: bool,
    /// May administer.
    pub can_manage: bool,
}

impl Capabilities {
    /// The all-false triple.
    pub const NONE: Self = Self::new(false, false, false);

    /// Build a triple from its three flags.
    pub const fn new(can_read: bool, can_write: bool, can_manage: bool) -> Self {
        Self {
            can_read,
            can_write,
            can_manage,
        }
    }

    /// Whether the triple grants `capability`.
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Read => self.can_read,
            Capability::Write => self.can_write,
            Capability::Manage => self.can_manage,
        }
    }

    /// Whether any flag is set.
    pub fn is_any(&self) -> bool {
        self.can_read || self.can_write || self.can_manage
    }
}
