//! Pole entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An organizational unit used as the unit of access control
/// (e.g. "Stock", "Commercial", "Pricing", "Direction").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pole {
    /// Internal numeric identifier.
    pub id: i64,
    /// Display name, also the key callers query by.
    pub name: String,
    /// When the pole was created.
    pub created_at: Option<DateTime<Utc>>,
}
