//! CLI command definitions and dispatch.

pub mod account;
pub mod migrate;
pub mod session;

use clap::{Parser, Subcommand};

use midgard_core::config::AppConfig;
use midgard_core::error::AppError;
use midgard_database::DatabasePool;

use crate::output::OutputFormat;

/// Midgard Web administration tool
#[derive(Debug, Parser)]
#[command(name = "midgard", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and per-environment overrides
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Configuration environment
    #[arg(short, long, env = "MIDGARD_ENV", default_value = "development")]
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
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Account management
    Account(account::AccountArgs),
    /// Web session maintenance
    Session(session::SessionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.config, &self.env)?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Account(args) => account::execute(args, &config, self.format).await,
            Commands::Session(args) => session::execute(args, &config).await,
        }
    }
}

/// Helper: load layered configuration
pub fn load_config(config_dir: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_dir, env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
