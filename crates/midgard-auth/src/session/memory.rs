//! In-process session store using the moka crate.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use moka::future::Cache;
use tracing::debug;

use midgard_core::config::SessionConfig;
use midgard_core::result::AppResult;
use midgard_entity::session::Session;

use super::store::SessionStore;

/// Session store kept in process memory.
///
/// The cache TTL equals the session lifetime and is measured from insert,
/// which matches the absolute expiry of a session. Sessions do not survive
/// a restart.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    cache: Cache<String, Session>,
}

impl MemorySessionStore {
    /// Create a store from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_seconds()))
            .build();
        Self { cache }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, key: &str, session: &Session) -> AppResult<()> {
        self.cache.insert(key.to_string(), session.clone()).await;
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<Session>> {
        Ok(self.cache.get(key).await.filter(|s| !s.is_expired()))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn purge_expired(&self) -> AppResult<u64> {
        let now = Utc::now();
        let expired: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, session)| session.is_expired_at(now))
            .map(|(key, _)| key.to_string())
            .collect();

        for key in &expired {
            self.cache.invalidate(key).await;
        }
        self.cache.run_pending_tasks().await;

        debug!(count = expired.len(), "Purged expired in-memory sessions");
        Ok(expired.len() as u64)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
