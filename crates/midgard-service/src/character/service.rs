//! Self-service character operations.

use std::sync::Arc;

use tracing::info;

use midgard_core::error::AppError;
use midgard_database::store::{AccountStore, CharacterStore};
use midgard_entity::character::{Character, NewCharacter};

use crate::context::RequestContext;

use super::name::{name_taken, normalize_class, normalize_name};

/// Lists and creates characters for the current account.
#[derive(Debug, Clone)]
pub struct CharacterService {
    accounts: Arc<dyn AccountStore>,
    characters: Arc<dyn CharacterStore>,
}

impl CharacterService {
    /// Creates a new character service.
    pub fn new(accounts: Arc<dyn AccountStore>, characters: Arc<dyn CharacterStore>) -> Self {
        Self {
            accounts,
            characters,
        }
    }

    /// Characters owned by the current account, ordered by id.
    pub async fn my_characters(&self, ctx: &RequestContext) -> Result<Vec<Character>, AppError> {
        self.characters.list_by_account(ctx.account_id).await
    }

    /// Creates a character on the current account.
    ///
    /// Refused once the account owns as many characters as it has slots.
    pub async fn create_character(
        &self,
        ctx: &RequestContext,
        name: Option<&str>,
        class: Option<i16>,
    ) -> Result<Character, AppError> {
        let name = normalize_name(name)?;
        let class = normalize_class(class)?;

        let account = self
            .accounts
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?;

        let owned = self.characters.count_by_account(account.account_id).await?;
        if owned >= account.character_slots.max(0) as u64 {
            return Err(AppError::validation("No free character slots left"));
        }

        if self.characters.exists_by_name(&name).await? {
            return Err(name_taken(&name));
        }

        let character = self
            .characters
            .create(&NewCharacter {
                account_id: account.account_id,
                name,
                class,
            })
            .await?;

        info!(
            account_id = account.account_id,
            char_id = character.char_id,
            name = %character.name,
            "Character created"
        );
        Ok(character)
    }
}
