//! Account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use midgard_core::error::{AppError, ErrorKind};
use midgard_core::result::AppResult;
use midgard_core::types::pagination::{PageRequest, PageResponse};
use midgard_entity::account::{Account, BanState, NewAccount};

use crate::store::AccountStore;

const ACCOUNT_COLUMNS: &str = "account_id, userid, user_pass, sex, email, group_id, state, \
                               logincount, lastlogin, last_ip, character_slots";

/// Repository for the `login` table.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, account_id: i32) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM login WHERE account_id = $1"
        ))
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find account by id", e))
    }

    async fn find_by_userid(&self, userid: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM login WHERE userid = $1"
        ))
        .bind(userid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find account by userid", e)
        })
    }

    async fn exists_by_userid_or_email(&self, userid: &str, email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM login WHERE userid = $1 OR email = $2)",
        )
        .bind(userid)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check account existence", e)
        })
    }

    async fn email_taken_by_other(&self, email: &str, account_id: i32) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM login WHERE email = $1 AND account_id <> $2)",
        )
        .bind(email)
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check email usage", e))
    }

    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO login (userid, user_pass, sex, email, group_id, state, logincount, \
             lastlogin, last_ip, character_slots) \
             VALUES ($1, $2, $3, $4, $5, 0, 0, NOW(), $6, $7) \
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(&data.userid)
        .bind(&data.user_pass)
        .bind(data.sex.as_str())
        .bind(&data.email)
        .bind(data.role.group_id())
        .bind(&data.last_ip)
        .bind(data.character_slots)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("login_userid_key") =>
            {
                AppError::conflict(format!("User id '{}' already exists", data.userid))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("login_email_key") => {
                AppError::conflict(format!("Email '{}' already exists", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    async fn record_login(&self, account_id: i32, ip: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE login SET logincount = logincount + 1, lastlogin = NOW(), last_ip = $2 \
             WHERE account_id = $1",
        )
        .bind(account_id)
        .bind(ip)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record login", e))?;
        Ok(())
    }

    async fn set_ban_state(&self, account_id: i32, state: BanState) -> AppResult<bool> {
        let result = sqlx::query("UPDATE login SET state = $2 WHERE account_id = $1")
            .bind(account_id)
            .bind(state.state())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update ban state", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_email(&self, account_id: i32, email: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE login SET email = $2 WHERE account_id = $1")
            .bind(account_id)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("login_email_key") =>
                {
                    AppError::conflict(format!("Email '{email}' already exists"))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to update email", e),
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Account>> {
        let total = self.count().await?;

        let accounts = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM login ORDER BY account_id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))?;

        Ok(PageResponse::new(accounts, page, total))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM login")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count accounts", e)
            })?;
        Ok(total as u64)
    }
}
