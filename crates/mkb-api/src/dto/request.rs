//! Query string DTOs.

use serde::{Deserialize, Serialize};

/// `GET /api/access?pole=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessQuery {
    /// Pole name. Missing is treated as empty and rejected for
    /// authenticated callers.
    #[serde(default)]
    pub pole: String,
}

/// `GET /api/access/check?pole=&capability=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckQuery {
    /// Pole name.
    #[serde(default)]
    pub pole: String,
    /// `read`, `write`, or `manage`.
    #[serde(default)]
    pub capability: String,
}
