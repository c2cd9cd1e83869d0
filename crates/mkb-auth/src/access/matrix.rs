//! Role level to capability mapping.
//!
//! | Level | Role                 | Read | Write | Manage |
//! |-------|----------------------|------|-------|--------|
//! | 1     | CEO                  | yes  | yes   | yes    |
//! | 2     | Executive committee  | yes  | yes   | yes    |
//! | 3     | Pole head            | yes  | yes   | yes    |
//! | 4     | Senior contributor   | yes  | yes   | no     |
//! | 5     | Standard contributor | yes  | no    | no     |
//!
//! Any other value, or no value at all, grants nothing.

use mkb_entity::access::{Capabilities, PoleAccess, RoleLevel};

/// Static, total mapping from role level to capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessMatrix;

impl AccessMatrix {
    /// Capabilities granted by a known role level.
    pub const fn for_level(level: RoleLevel) -> Capabilities {
        match level {
            RoleLevel::Ceo => Capabilities::new(true, true, true),
            RoleLevel::ExecutiveCommittee => Capabilities::new(true, true, true),
            RoleLevel::PoleHead => Capabilities::new(true, true, true),
            RoleLevel::SeniorContributor => Capabilities::new(true, true, false),
            RoleLevel::StandardContributor => Capabilities::new(true, false, false),
        }
    }

    /// Capabilities for a raw stored level. Out-of-range and absent levels
    /// map to [`Capabilities::NONE`].
    pub fn capabilities(role_level: Option<i32>) -> Capabilities {
        match role_level.and_then(RoleLevel::from_raw) {
            Some(level) => Self::for_level(level),
            None => Capabilities::NONE,
        }
    }

    /// Builds the full access answer for a raw stored level, keeping the raw
    /// value even when it is not a known level.
    pub fn access(role_level: Option<i32>) -> PoleAccess {
        PoleAccess::new(role_level, Self::capabilities(role_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(level: Option<i32>) -> (bool, bool, bool) {
        let c = AccessMatrix::capabilities(level);
        (c.can_read, c.can_write, c.can_manage)
    }

    #[test]
    fn test_known_levels() {
        assert_eq!(triple(Some(1)), (true, true, true));
        assert_eq!(triple(Some(2)), (true, true, true));
        assert_eq!(triple(Some(3)), (true, true, true));
        assert_eq!(triple(Some(4)), (true, true, false));
        assert_eq!(triple(Some(5)), (true, false, false));
    }

    #[test]
    fn test_unknown_levels_grant_nothing() {
        for raw in [Some(0), Some(6), Some(-1), Some(i32::MAX), None] {
            assert_eq!(triple(raw), (false, false, false), "level {raw:?}");
        }
    }

    #[test]
    fn test_access_keeps_raw_level() {
        let access = AccessMatrix::access(Some(9));
        assert_eq!(access.role_level, Some(9));
        assert!(!access.capabilities.is_any());

        let access = AccessMatrix::access(Some(4));
        assert_eq!(access.role_level, Some(4));
        assert!(access.can_write());
        assert!(!access.can_manage());
    }
}
