//! Session store backed by the `web_sessions` table.

use async_trait::async_trait;

use midgard_core::result::AppResult;
use midgard_database::repositories::SessionRepository;
use midgard_entity::session::Session;

use super::store::SessionStore;

/// Session store that survives restarts and is shared between instances.
#[derive(Debug, Clone)]
pub struct DatabaseSessionStore {
    repo: SessionRepository,
}

impl DatabaseSessionStore {
    /// Create a store over the session repository.
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SessionStore for DatabaseSessionStore {
    async fn insert(&self, key: &str, session: &Session) -> AppResult<()> {
        self.repo.insert(key, session).await
    }

    async fn get(&self, key: &str) -> AppResult<Option<Session>> {
        self.repo.find_active(key).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.repo.delete(key).await.map(|_| ())
    }

    async fn purge_expired(&self) -> AppResult<u64> {
        self.repo.delete_expired().await
    }

    fn backend_name(&self) -> &'static str {
        "database"
    }
}
