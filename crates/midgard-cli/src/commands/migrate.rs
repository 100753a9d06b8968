//! Database migration management commands.

use clap::{Args, Subcommand};
use tracing::info;

use midgard_core::config::AppConfig;
use midgard_core::error::AppError;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            midgard_database::migration::run_migrations(pool.pool()).await?;
            info!("Migrations applied from CLI");
            output::print_success("All migrations applied successfully.");
        }
    }

    pool.close().await;
    Ok(())
}
