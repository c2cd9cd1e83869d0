//! Pole repository implementation.

use sqlx::PgPool;

use mkb_core::result::AppResult;
use mkb_entity::pole::Pole;

use crate::connection::db_error;

/// Read access to the pole catalogue.
#[derive(Debug, Clone)]
pub struct PoleRepository {
    pool: PgPool,
}

impl PoleRepository {
    /// Create a new pole repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every pole, ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Pole>> {
        sqlx::query_as::<_, Pole>("SELECT id, name, created_at FROM poles ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list poles", e))
    }

    /// Find a pole by its exact name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Pole>> {
        sqlx::query_as::<_, Pole>("SELECT id, name, created_at FROM poles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find pole", e))
    }
}
