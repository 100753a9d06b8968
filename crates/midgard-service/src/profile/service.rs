//! Profile viewing and email changes.

use std::sync::Arc;

use tracing::info;
use validator::ValidateEmail;

use midgard_core::error::AppError;
use midgard_database::store::AccountStore;
use midgard_entity::account::Account;

use crate::account::service::MAX_EMAIL_LENGTH;
use crate::context::RequestContext;

/// Email already used by another account.
pub const EMAIL_IN_USE: &str = "This email is already in use";

/// Handles account self-service operations.
#[derive(Debug, Clone)]
pub struct ProfileService {
    accounts: Arc<dyn AccountStore>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Gets the current account.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<Account, AppError> {
        self.accounts
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Changes the current account's email.
    pub async fn update_email(
        &self,
        ctx: &RequestContext,
        email: Option<String>,
    ) -> Result<(), AppError> {
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::validation("Email is required"))?;

        if email.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AppError::validation(format!(
                "Email must be at most {MAX_EMAIL_LENGTH} characters"
            )));
        }

        if !email.validate_email() {
            return Err(AppError::validation("Invalid email address"));
        }

        if self
            .accounts
            .email_taken_by_other(&email, ctx.account_id)
            .await?
        {
            return Err(AppError::conflict(EMAIL_IN_USE));
        }

        let updated = self
            .accounts
            .update_email(ctx.account_id, &email)
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    AppError::conflict(EMAIL_IN_USE)
                } else {
                    e
                }
            })?;
        if !updated {
            return Err(AppError::not_found("Account not found"));
        }

        info!(account_id = ctx.account_id, "Email updated");
        Ok(())
    }
}
