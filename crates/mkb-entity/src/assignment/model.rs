//! User–pole assignment row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mkb_core::traits::AssignmentRecord;

/// Associates a user with a pole at a given role level.
///
/// Rows are created and removed by administrators; this service only reads
/// them. The row is joined with `poles` so it carries the pole name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PoleAssignment {
    /// The assigned user.
    pub user_id: Uuid,
    /// Internal identifier of the pole.
    pub pole_id: i64,
    /// Name of the pole.
    pub pole_name: String,
    /// Raw role level (1 = most privileged). May be null in the store.
    pub role_level: Option<i32>,
}

impl From<PoleAssignment> for AssignmentRecord {
    fn from(row: PoleAssignment) -> Self {
        Self {
            pole_name: row.pole_name,
            role_level: row.role_level,
        }
    }
}
