//! Site settings administration.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use midgard_core::error::AppError;
use midgard_database::store::SettingsStore;
use midgard_entity::settings::model::MAX_KEY_LENGTH;

use crate::context::RequestContext;

/// Reads and writes the key/value site settings.
#[derive(Debug, Clone)]
pub struct SiteSettingsService {
    settings: Arc<dyn SettingsStore>,
}

impl SiteSettingsService {
    /// Creates a new site settings service.
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// All settings as a key/value map.
    pub async fn site_settings(
        &self,
        ctx: &RequestContext,
    ) -> Result<BTreeMap<String, String>, AppError> {
        ctx.require_admin()?;
        Ok(self
            .settings
            .all()
            .await?
            .into_iter()
            .map(|s| (s.setting_key, s.setting_value))
            .collect())
    }

    /// Inserts or overwrites each given key.
    pub async fn update_site_settings(
        &self,
        ctx: &RequestContext,
        values: BTreeMap<String, String>,
    ) -> Result<(), AppError> {
        ctx.require_admin()?;

        if let Some(bad) = values
            .keys()
            .find(|k| k.is_empty() || k.chars().count() > MAX_KEY_LENGTH)
        {
            return Err(AppError::validation(format!(
                "Setting key '{bad}' must be 1 to {MAX_KEY_LENGTH} characters"
            )));
        }

        let entries: Vec<(String, String)> = values.into_iter().collect();
        self.settings.upsert(&entries).await?;

        info!(
            admin_id = ctx.account_id,
            count = entries.len(),
            "Site settings updated"
        );
        Ok(())
    }
}
