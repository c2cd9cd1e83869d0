//! Resolved access for a (user, pole) pair.

use serde::{Deserialize, Serialize};

use super::capability::{Capabilities, Capability};
use super::level::RoleLevel;

/// What a user may do in one pole.
///
/// `role_level` is the raw stored value, or `None` when the user is
/// unauthenticated or has no assignment. Serializes flat as
/// `{role_level, can_read, can_write, can_manage}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoleAccess {
    /// Raw role level of the assignment, if any.
    pub role_level: Option<i32>,
    /// Derived capability triple.
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

impl PoleAccess {
    /// Access for an unauthenticated or unassigned user.
    pub const fn denied() -> Self {
        Self {
            role_level: None,
            capabilities: Capabilities::NONE,
        }
    }

    /// Access for an assigned user.
    pub fn new(role_level: Option<i32>, capabilities: Capabilities) -> Self {
        Self {
            role_level,
            capabilities,
        }
    }

    /// The defined role level, if the raw value maps to one.
    pub fn level(&self) -> Option<RoleLevel> {
        self.role_level.and_then(RoleLevel::from_raw)
    }

    /// Whether this access grants `capability`.
    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities.allows(capability)
    }

    /// May view.
    pub fn can_read(&self) -> bool {
        self.capabilities.can_read
    }

    /// May create or modify.
    pub fn can_write(&self) -> bool {
        self.capabilities.can_write
    }

    /// May administer.
    pub fn can_manage(&self) -> bool {
        self.capabilities.can_manage
    }
}

impl Default for PoleAccess {
    fn default() -> Self {
        Self::denied()
    }
}

/// One entry of a user's pole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoleGrant {
    /// Name of the pole.
    pub pole_name: String,
    /// Raw role level of the assignment.
    pub role_level: Option<i32>,
    /// Derived capability triple.
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

impl PoleGrant {
    /// Pair a pole name with its resolved access.
    pub fn new(pole_name: impl Into<String>, access: PoleAccess) -> Self {
        Self {
            pole_name: pole_name.into(),
            role_level: access.role_level,
            capabilities: access.capabilities,
        }
    }
}
