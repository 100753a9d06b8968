//! Character repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use midgard_core::error::{AppError, ErrorKind};
use midgard_core::result::AppResult;
use midgard_entity::character::model::{DEFAULT_BASE_LEVEL, DEFAULT_JOB_LEVEL, DEFAULT_MAP, DEFAULT_ZENY};
use midgard_entity::character::{Character, NewCharacter};

use crate::store::CharacterStore;

const CHARACTER_COLUMNS: &str =
    "char_id, account_id, name, class, base_level, job_level, zeny, last_map, online, last_login";

/// Repository for the `char` table.
#[derive(Debug, Clone)]
pub struct CharacterRepository {
    pool: PgPool,
}

impl CharacterRepository {
    /// Create a new character repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_where(&self, sql: &str, what: &str) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, format!("Failed to count {what}"), e))?;
        Ok(total as u64)
    }
}

#[async_trait]
impl CharacterStore for CharacterRepository {
    async fn list_by_account(&self, account_id: i32) -> AppResult<Vec<Character>> {
        sqlx::query_as::<_, Character>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM \"char\" WHERE account_id = $1 ORDER BY char_id"
        ))
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list characters", e))
    }

    async fn count_by_account(&self, account_id: i32) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM \"char\" WHERE account_id = $1")
            .bind(account_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count account characters", e)
            })?;
        Ok(total as u64)
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM \"char\" WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check character name", e)
            })
    }

    async fn create(&self, data: &NewCharacter) -> AppResult<Character> {
        sqlx::query_as::<_, Character>(&format!(
            "INSERT INTO \"char\" (account_id, name, class, base_level, job_level, zeny, last_map) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CHARACTER_COLUMNS}"
        ))
        .bind(data.account_id)
        .bind(&data.name)
        .bind(data.class)
        .bind(DEFAULT_BASE_LEVEL)
        .bind(DEFAULT_JOB_LEVEL)
        .bind(DEFAULT_ZENY)
        .bind(DEFAULT_MAP)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("char_name_key") => {
                AppError::conflict(format!("Character \"{}\" already exists", data.name))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("char_account_id_fkey") =>
            {
                AppError::not_found(format!("Account {} not found", data.account_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create character", e),
        })
    }

    async fn delete(&self, char_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM \"char\" WHERE char_id = $1")
            .bind(char_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete character", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        self.count_where("SELECT COUNT(*) FROM \"char\"", "characters")
            .await
    }

    async fn count_online(&self) -> AppResult<u64> {
        self.count_where(
            "SELECT COUNT(*) FROM \"char\" WHERE online = TRUE",
            "online characters",
        )
        .await
    }
}
