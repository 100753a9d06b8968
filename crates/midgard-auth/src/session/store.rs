//! Session storage abstraction.

use async_trait::async_trait;

use midgard_core::result::AppResult;
use midgard_entity::session::Session;

/// Persistence for sessions, keyed by the token digest.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Store a session.
    async fn insert(&self, key: &str, session: &Session) -> AppResult<()>;

    /// Load an unexpired session.
    async fn get(&self, key: &str) -> AppResult<Option<Session>>;

    /// Remove a session; removing an absent key succeeds.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Drop expired sessions, returning how many were removed.
    async fn purge_expired(&self) -> AppResult<u64>;

    /// Backend name for logs.
    fn backend_name(&self) -> &'static str;
}
