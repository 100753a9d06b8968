//! Site settings repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use midgard_core::error::{AppError, ErrorKind};
use midgard_core::result::AppResult;
use midgard_entity::settings::SiteSetting;

use crate::store::SettingsStore;

/// Repository for the `site_settings` table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn all(&self) -> AppResult<Vec<SiteSetting>> {
        sqlx::query_as::<_, SiteSetting>(
            "SELECT setting_key, setting_value, updated_at FROM site_settings ORDER BY setting_key",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load site settings", e))
    }

    async fn upsert(&self, entries: &[(String, String)]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (key, value) in entries {
            sqlx::query(
                "INSERT INTO site_settings (setting_key, setting_value, updated_at) \
                 VALUES ($1, $2, NOW()) \
                 ON CONFLICT (setting_key) \
                 DO UPDATE SET setting_value = EXCLUDED.setting_value, updated_at = NOW()",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to save setting '{key}'"),
                    e,
                )
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit site settings", e)
        })
    }
}
