//! Access value types: role levels, capability triples, and resolved grants.

pub mod capability;
pub mod grant;
pub mod level;

pub use capability::{Capabilities, Capability};
pub use grant::{PoleAccess, PoleGrant};
pub use level::RoleLevel;
