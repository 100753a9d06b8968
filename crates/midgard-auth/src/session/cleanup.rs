//! Periodic removal of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{error, info};

use midgard_core::error::AppError;

use super::authority::SessionAuthority;

/// Purges expired sessions on a fixed interval.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    authority: Arc<SessionAuthority>,
}

impl SessionCleanup {
    /// Creates a new session cleanup handler.
    pub fn new(authority: Arc<SessionAuthority>) -> Self {
        Self { authority }
    }

    /// Runs one cleanup cycle, returning the number of sessions removed.
    pub async fn run_cleanup(&self) -> Result<u64, AppError> {
        let purged = self.authority.purge_expired().await?;
        if purged > 0 {
            info!(purged, "Session cleanup completed");
        }
        Ok(purged)
    }

    /// Runs cleanup cycles every `interval` until `cancel` flips to `true`.
    pub async fn run(self, interval: Duration, mut cancel: watch::Receiver<bool>) {
        info!(
            interval_secs = interval.as_secs(),
            "Session cleanup task started"
        );

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        info!("Session cleanup task shutting down");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.run_cleanup().await {
                        error!(error = %e, "Session cleanup failed");
                    }
                }
            }
        }
    }
}
