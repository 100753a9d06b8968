//! Admin account and character management.

use std::sync::Arc;

use tracing::info;

use midgard_core::error::AppError;
use midgard_core::types::pagination::{PageRequest, PageResponse};
use midgard_database::store::{AccountStore, CharacterStore};
use midgard_entity::account::{Account, BanState};
use midgard_entity::character::{Character, NewCharacter};

use crate::character::name::{name_taken, normalize_class, normalize_name};
use crate::context::RequestContext;

/// Character creation on behalf of any account.
#[derive(Debug, Clone, Default)]
pub struct AdminCharacterInput {
    /// Target account.
    pub account_id: Option<i32>,
    /// Character name.
    pub name: Option<String>,
    /// Job class code.
    pub class: Option<i16>,
}

/// Handles administrative account and character operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    accounts: Arc<dyn AccountStore>,
    characters: Arc<dyn CharacterStore>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(accounts: Arc<dyn AccountStore>, characters: Arc<dyn CharacterStore>) -> Self {
        Self {
            accounts,
            characters,
        }
    }

    /// Lists accounts, newest first.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Account>, AppError> {
        ctx.require_admin()?;
        self.accounts.list(&page).await
    }

    /// Bans or unbans an account.
    pub async fn set_ban(
        &self,
        ctx: &RequestContext,
        account_id: i32,
        banned: bool,
    ) -> Result<BanState, AppError> {
        ctx.require_admin()?;

        let state = BanState::from_banned(banned);
        if !self.accounts.set_ban_state(account_id, state).await? {
            return Err(AppError::not_found("Account not found"));
        }

        info!(
            admin_id = ctx.account_id,
            account_id,
            state = %state,
            "Account ban state changed"
        );
        Ok(state)
    }

    /// Characters of any account, ordered by id.
    pub async fn user_characters(
        &self,
        ctx: &RequestContext,
        account_id: i32,
    ) -> Result<Vec<Character>, AppError> {
        ctx.require_admin()?;
        self.characters.list_by_account(account_id).await
    }

    /// Creates a character on any existing account, ignoring slot limits.
    pub async fn create_character_for(
        &self,
        ctx: &RequestContext,
        input: AdminCharacterInput,
    ) -> Result<Character, AppError> {
        ctx.require_admin()?;

        let account_id = match (input.account_id, input.name.as_deref()) {
            (Some(id), Some(name)) if !name.trim().is_empty() => id,
            _ => {
                return Err(AppError::validation(
                    "Character name and account id are required",
                ));
            }
        };
        let name = normalize_name(input.name.as_deref())?;
        let class = normalize_class(input.class)?;

        if self.accounts.find_by_id(account_id).await?.is_none() {
            return Err(AppError::not_found("Account not found"));
        }

        if self.characters.exists_by_name(&name).await? {
            return Err(name_taken(&name));
        }

        let character = self
            .characters
            .create(&NewCharacter {
                account_id,
                name,
                class,
            })
            .await?;

        info!(
            admin_id = ctx.account_id,
            account_id,
            char_id = character.char_id,
            "Character created by admin"
        );
        Ok(character)
    }

    /// Deletes a character.
    pub async fn delete_character(
        &self,
        ctx: &RequestContext,
        char_id: i32,
    ) -> Result<(), AppError> {
        ctx.require_admin()?;

        if !self.characters.delete(char_id).await? {
            return Err(AppError::not_found("Character not found"));
        }

        info!(admin_id = ctx.account_id, char_id, "Character deleted");
        Ok(())
    }
}
