//! Web session maintenance commands.

use clap::{Args, Subcommand};
use tracing::info;

use midgard_core::config::{AppConfig, SessionBackend};
use midgard_core::error::AppError;
use midgard_database::repositories::SessionRepository;

use crate::output;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Delete expired rows from `web_sessions`
    Purge,
}

/// Execute session commands
pub async fn execute(args: &SessionArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        SessionCommand::Purge => {
            if config.session.backend == SessionBackend::Memory {
                output::print_warning(
                    "Session backend is 'memory'; in-process sessions are swept by the server",
                );
            }

            let pool = super::create_db_pool(config).await?;
            let removed = SessionRepository::new(pool.pool().clone())
                .delete_expired()
                .await?;
            pool.close().await;

            info!(removed, "Expired sessions purged from CLI");
            output::print_success(&format!("Purged {removed} expired session(s)"));
        }
    }

    Ok(())
}
