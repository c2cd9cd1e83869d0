//! Contract for the external store holding user–pole assignments.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::id::UserId;

/// One user–pole assignment as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Name of the pole the user is assigned to.
    pub pole_name: String,
    /// Raw role level stored for the assignment. `None` when the column is null.
    pub role_level: Option<i32>,
}

/// Read-only access to user–pole assignments.
///
/// At most one assignment is expected per (user, pole) pair; the store does
/// not have to enforce it. "No row" is `Ok(None)` / an empty list, and any
/// `Err` means the store could not answer.
///
/// Two implementations are provided:
/// - PostgreSQL via sqlx (`mkb-database`)
/// - the hosted backend's REST interface (`mkb-baas`)
#[async_trait]
pub trait AssignmentStore: Send + Sync + 'static {
    /// Find the assignment of `user_id` to the pole named `pole_name`.
    async fn find_assignment(
        &self,
        user_id: &UserId,
        pole_name: &str,
    ) -> AppResult<Option<AssignmentRecord>>;

    /// List every assignment held by `user_id`.
    async fn list_assignments(&self, user_id: &UserId) -> AppResult<Vec<AssignmentRecord>>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
