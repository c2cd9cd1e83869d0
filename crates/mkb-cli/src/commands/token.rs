//! Development token commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use mkb_auth::jwt::JwtEncoder;
use mkb_core::config::AppConfig;
use mkb_core::result::AppResult;
use mkb_core::types::UserId;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

const MAX_TTL_MINUTES: u64 = 365 * 24 * 60;

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Mint a bearer token signed with `auth.jwt_secret`
    Mint {
        /// User UUID to place in the subject claim
        #[arg(short, long)]
        user: UserId,
        /// Optional email claim
        #[arg(long)]
        email: Option<String>,
        /// Lifetime in minutes, at most one year (defaults to `auth.dev_token_ttl_minutes`)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TTL_MINUTES))]
        ttl_minutes: Option<u64>,
    },
}

#[derive(Debug, Serialize)]
struct MintedToken {
    access_token: String,
    token_type: &'static str,
    expires_in: i64,
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    config.auth.validate()?;
    let encoder = JwtEncoder::new(&config.auth);

    match &args.command {
        TokenCommand::Mint {
            user,
            email,
            ttl_minutes,
        } => {
            let minutes = ttl_minutes.unwrap_or(config.auth.dev_token_ttl_minutes);
            let ttl = JwtEncoder::ttl_from_minutes(minutes)?;
            let token = encoder.mint_with_ttl(*user, email.as_deref(), ttl)?;

            match format {
                OutputFormat::Json => output::print_json(&MintedToken {
                    access_token: token,
                    token_type: "bearer",
                    expires_in: ttl.num_seconds(),
                }),
                OutputFormat::Table => println!("{token}"),
            }
        }
    }

    Ok(())
}
