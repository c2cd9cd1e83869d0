//! Access resolution commands.

use clap::{Args, Subcommand};
use tabled::Tabled;

use mkb_auth::access::PoleAccessResolver;
use mkb_core::config::AppConfig;
use mkb_core::result::AppResult;
use mkb_core::types::UserId;
use mkb_entity::access::{PoleGrant, RoleLevel};

use crate::output::{self, OutputFormat, level_cell, yes_no};

/// Arguments for access commands
#[derive(Debug, Args)]
pub struct AccessArgs {
    /// Access subcommand
    #[command(subcommand)]
    pub command: AccessCommand,
}

/// Access subcommands
#[derive(Debug, Subcommand)]
pub enum AccessCommand {
    /// Show a user's capabilities in one pole
    Check {
        /// User UUID
        #[arg(short, long)]
        user: UserId,
        /// Pole name (exact, case-sensitive)
        #[arg(short, long)]
        pole: String,
    },
    /// List every pole a user is assigned to
    List {
        /// User UUID
        #[arg(short, long)]
        user: UserId,
    },
}

/// Grant display row for table output
#[derive(Debug, Tabled)]
struct GrantRow {
    #[tabled(rename = "Pole")]
    pole: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Read")]
    read: &'static str,
    #[tabled(rename = "Write")]
    write: &'static str,
    #[tabled(rename = "Manage")]
    manage: &'static str,
}

impl From<&PoleGrant> for GrantRow {
    fn from(grant: &PoleGrant) -> Self {
        Self {
            pole: grant.pole_name.clone(),
            level: level_cell(grant.role_level),
            role: role_title(grant.role_level).to_string(),
            read: yes_no(grant.capabilities.can_read),
            write: yes_no(grant.capabilities.can_write),
            manage: yes_no(grant.capabilities.can_manage),
        }
    }
}

fn role_title(role_level: Option<i32>) -> &'static str {
    match role_level {
        Some(raw) => RoleLevel::from_raw(raw).map_or("unknown", |l| l.title()),
        None => "-",
    }
}

/// Execute access commands
pub async fn execute(args: &AccessArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let store = super::connect_store(config).await?;
    let resolver = PoleAccessResolver::new(store);

    match &args.command {
        AccessCommand::Check { user, pole } => {
            let access = resolver.resolve_access(Some(user), pole).await?;
            match format {
                OutputFormat::Json => output::print_json(&access),
                OutputFormat::Table => {
                    println!("Access for {user} in '{}'", pole.trim());
                    output::print_kv("Level", &level_cell(access.role_level));
                    output::print_kv("Role", role_title(access.role_level));
                    output::print_kv("Read", yes_no(access.can_read()));
                    output::print_kv("Write", yes_no(access.can_write()));
                    output::print_kv("Manage", yes_no(access.can_manage()));
                }
            }
        }
        AccessCommand::List { user } => {
            let grants = resolver.list_accessible_poles(Some(user)).await?;
            output::print_list(&grants, format, |g| GrantRow::from(g));
        }
    }

    Ok(())
}
