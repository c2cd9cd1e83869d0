//! CLI command definitions and dispatch.

pub mod access;
pub mod migrate;
pub mod pole;
pub mod token;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use mkb_baas::RestAssignmentStore;
use mkb_core::config::{AppConfig, StoreProvider};
use mkb_core::result::AppResult;
use mkb_core::traits::AssignmentStore;
use mkb_database::{AssignmentRepository, DatabasePool};

use crate::output::OutputFormat;

/// MKB Pilot: pole-based access control
#[derive(Debug, Parser)]
#[command(name = "mkb", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (skips environment layering)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Environment overlay loaded on top of `config/default`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a user's pole access
    Access(access::AccessArgs),
    /// Pole catalogue
    Pole(pole::PoleArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Development bearer tokens
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> AppResult<()> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Access(args) => access::execute(args, &config, self.format).await,
            Commands::Pole(args) => pole::execute(args, &config, self.format).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
        }
    }

    fn load_config(&self) -> AppResult<AppConfig> {
        match &self.config {
            Some(path) => AppConfig::load_file(path),
            None => AppConfig::load(&self.env),
        }
    }
}

/// Helper: connect to the database described by `database`
pub async fn connect_db(config: &AppConfig) -> AppResult<DatabasePool> {
    DatabasePool::connect(&config.database).await
}

/// Helper: build the assignment store selected by `store.provider`
pub async fn connect_store(config: &AppConfig) -> AppResult<Arc<dyn AssignmentStore>> {
    tracing::debug!(provider = %config.store.provider, "Connecting assignment store");
    let store: Arc<dyn AssignmentStore> = match config.store.provider {
        StoreProvider::Postgres => {
            let pool = connect_db(config).await?;
            Arc::new(AssignmentRepository::new(pool.into_pool()))
        }
        StoreProvider::Rest => Arc::new(RestAssignmentStore::new(&config.store.rest)?),
    };
    Ok(store)
}
