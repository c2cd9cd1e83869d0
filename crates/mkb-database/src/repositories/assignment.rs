//! User–pole assignment repository and its [`AssignmentStore`] implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use mkb_core::result::AppResult;
use mkb_core::traits::{AssignmentRecord, AssignmentStore};
use mkb_core::types::UserId;
use mkb_entity::assignment::PoleAssignment;

use crate::connection::{db_error, ping};

const SELECT_ASSIGNMENT: &str = "SELECT up.user_id, up.pole_id, p.name AS pole_name, up.role_level \
     FROM user_poles up \
     INNER JOIN poles p ON p.id = up.pole_id";

/// Repository for reading user–pole assignments.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    /// Create a new assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the assignment of a user to a pole by pole name.
    ///
    /// Uniqueness of (user, pole) is assumed; if the table holds duplicates
    /// the first row is returned.
    pub async fn find_by_user_and_pole(
        &self,
        user_id: &UserId,
        pole_name: &str,
    ) -> AppResult<Option<PoleAssignment>> {
        sqlx::query_as::<_, PoleAssignment>(&format!(
            "{SELECT_ASSIGNMENT} WHERE up.user_id = $1 AND p.name = $2 LIMIT 1"
        ))
        .bind(user_id)
        .bind(pole_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find pole assignment", e))
    }

    /// List all assignments of a user, ordered by pole name.
    pub async fn find_by_user(&self, user_id: &UserId) -> AppResult<Vec<PoleAssignment>> {
        sqlx::query_as::<_, PoleAssignment>(&format!(
            "{SELECT_ASSIGNMENT} WHERE up.user_id = $1 ORDER BY p.name ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list pole assignments", e))
    }
}

#[async_trait]
impl AssignmentStore for AssignmentRepository {
    async fn find_assignment(
        &self,
        user_id: &UserId,
        pole_name: &str,
    ) -> AppResult<Option<AssignmentRecord>> {
        let row = self.find_by_user_and_pole(user_id, pole_name).await?;
        debug!(user_id = %user_id, pole = pole_name, found = row.is_some(), "Assignment lookup");
        Ok(row.map(AssignmentRecord::from))
    }

    async fn list_assignments(&self, user_id: &UserId) -> AppResult<Vec<AssignmentRecord>> {
        let rows = self.find_by_user(user_id).await?;
        Ok(rows.into_iter().map(AssignmentRecord::from).collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        ping(&self.pool).await
    }
}
