//! Response DTOs.

use serde::{Deserialize, Serialize};

use mkb_entity::access::Capability;

/// Result of a single capability check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Pole that was checked.
    pub pole_name: String,
    /// Capability that was checked.
    pub capability: Capability,
    /// Whether the caller holds the capability.
    pub allowed: bool,
    /// Caller's raw role level in the pole, if assigned.
    pub role_level: Option<i32>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `ok` or `unavailable`.
    pub store: String,
}
