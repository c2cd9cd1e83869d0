//! MKB Pilot server: pole-based access control over HTTP.
//!
//! Main entry point that loads configuration, selects the assignment store,
//! and starts the API server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use mkb_baas::RestAssignmentStore;
use mkb_core::config::{AppConfig, StoreProvider};
use mkb_core::error::AppError;
use mkb_core::traits::AssignmentStore;
use mkb_database::{AssignmentRepository, DatabasePool};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `MKB_CONFIG` if set, otherwise from
/// `config/default` layered with `config/$MKB_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config = match std::env::var("MKB_CONFIG") {
        Ok(path) => AppConfig::load_file(&path)?,
        Err(_) => {
            let env = std::env::var("MKB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)?
        }
    };

    config.auth.validate()?;

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        provider = %config.store.provider,
        "Starting MKB Pilot v{}",
        env!("CARGO_PKG_VERSION")
    );

    let (store, db_pool) = build_store(&config).await?;

    mkb_api::run_server(config, store, shutdown_signal()).await?;

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    Ok(())
}

/// Build the assignment store selected by `store.provider`.
///
/// Returns the database pool alongside when one was opened so it can be
/// closed on shutdown.
async fn build_store(
    config: &AppConfig,
) -> Result<(Arc<dyn AssignmentStore>, Option<DatabasePool>), AppError> {
    match config.store.provider {
        StoreProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;

            if config.database.run_migrations {
                tracing::info!("Running database migrations...");
                mkb_database::migration::run_migrations(pool.pool()).await?;
                tracing::info!("Database migrations complete");
            }

            let repo = AssignmentRepository::new(pool.pool().clone());
            Ok((Arc::new(repo), Some(pool)))
        }
        StoreProvider::Rest => {
            let store = RestAssignmentStore::new(&config.store.rest)?;
            tracing::info!(endpoint = %store.endpoint(), "Using REST assignment store");
            Ok((Arc::new(store), None))
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
