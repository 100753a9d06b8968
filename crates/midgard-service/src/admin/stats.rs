//! Site statistics and public server status.

use std::sync::Arc;

use serde::Serialize;

use midgard_core::error::AppError;
use midgard_database::store::{AccountStore, CharacterStore};

use crate::context::RequestContext;

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    /// Number of accounts.
    pub total_users: u64,
    /// Number of characters.
    pub total_chars: u64,
    /// Number of characters currently in game.
    pub online_chars: u64,
}

/// Public snapshot of the game server population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    /// Characters currently in game.
    pub online: u64,
    /// Number of accounts.
    pub total_accounts: u64,
}

/// Aggregates counts over accounts and characters.
#[derive(Debug, Clone)]
pub struct StatsService {
    accounts: Arc<dyn AccountStore>,
    characters: Arc<dyn CharacterStore>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(accounts: Arc<dyn AccountStore>, characters: Arc<dyn CharacterStore>) -> Self {
        Self {
            accounts,
            characters,
        }
    }

    /// Dashboard totals.
    pub async fn stats(&self, ctx: &RequestContext) -> Result<SiteStats, AppError> {
        ctx.require_admin()?;
        Ok(SiteStats {
            total_users: self.accounts.count().await?,
            total_chars: self.characters.count().await?,
            online_chars: self.characters.count_online().await?,
        })
    }

    /// Public population snapshot.
    pub async fn server_status(&self) -> Result<ServerStatus, AppError> {
        Ok(ServerStatus {
            online: self.characters.count_online().await?,
            total_accounts: self.accounts.count().await?,
        })
    }
}
