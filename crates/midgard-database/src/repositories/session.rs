//! Web session repository implementation.

use sqlx::PgPool;

use midgard_core::error::{AppError, ErrorKind};
use midgard_core::result::AppResult;
use midgard_entity::session::Session;

/// Repository for the `web_sessions` table.
///
/// Rows are keyed by the SHA-256 hex digest of the session token; the raw
/// token is never stored.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a session under `token_hash`.
    pub async fn insert(&self, token_hash: &str, session: &Session) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO web_sessions (token_hash, account_id, userid, group_id, created_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(token_hash)
        .bind(session.account_id)
        .bind(&session.userid)
        .bind(session.role.group_id())
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;
        Ok(())
    }

    /// Find an unexpired session by token hash.
    pub async fn find_active(&self, token_hash: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT account_id, userid, group_id, created_at, expires_at FROM web_sessions \
             WHERE token_hash = $1 AND expires_at > NOW()",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Delete a session. Returns `false` when nothing was stored.
    pub async fn delete(&self, token_hash: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM web_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete session", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every expired session, returning how many were removed.
    pub async fn delete_expired(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM web_sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
