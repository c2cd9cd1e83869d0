//! Pole catalogue commands.

use clap::{Args, Subcommand};
use tabled::Tabled;

use mkb_core::config::AppConfig;
use mkb_core::error::AppError;
use mkb_core::result::AppResult;
use mkb_database::PoleRepository;
use mkb_entity::pole::Pole;

use crate::output::{self, OutputFormat};

/// Arguments for pole commands
#[derive(Debug, Args)]
pub struct PoleArgs {
    /// Pole subcommand
    #[command(subcommand)]
    pub command: PoleCommand,
}

/// Pole subcommands
#[derive(Debug, Subcommand)]
pub enum PoleCommand {
    /// List all poles
    List,
    /// Show one pole by exact name
    Show {
        /// Pole name
        name: String,
    },
}

/// Pole display row for table output
#[derive(Debug, Tabled)]
struct PoleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Pole> for PoleRow {
    fn from(pole: &Pole) -> Self {
        Self {
            id: pole.id,
            name: pole.name.clone(),
            created_at: pole
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Execute pole commands
pub async fn execute(args: &PoleArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let pool = super::connect_db(config).await?;
    let repo = PoleRepository::new(pool.pool().clone());

    match &args.command {
        PoleCommand::List => {
            let poles = repo.find_all().await?;
            output::print_list(&poles, format, |p| PoleRow::from(p));
        }
        PoleCommand::Show { name } => {
            let pole = repo
                .find_by_name(name.trim())
                .await?
                .ok_or_else(|| AppError::not_found(format!("Pole '{}' not found", name.trim())))?;
            output::print_list(std::slice::from_ref(&pole), format, |p| PoleRow::from(p));
        }
    }

    pool.close().await;
    Ok(())
}
