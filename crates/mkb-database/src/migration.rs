//! Embedded migration runner for the pole and assignment tables.

use sqlx::PgPool;
use tracing::info;

use mkb_core::error::{AppError, ErrorKind};
use mkb_core::result::AppResult;

/// Apply all pending migrations from the workspace `migrations/` directory.
///
/// Only needed for local development and tests; in production the hosted
/// backend owns the schema.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed");
    Ok(())
}
