//! Settings service
//!
//! Reads and updates a user's budget settings. Updates validate before they
//! persist: a bad window size or budget never reaches the store.

use tracing::info;

use crate::error::MoneyTrackResult;
use crate::models::{Settings, UserId};
use crate::storage::Storage;

/// Service for budget settings management
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get a user's settings (defaults when the user never saved any)
    pub fn get(&self, user: &UserId) -> MoneyTrackResult<Settings> {
        self.storage.settings.get(user)
    }

    /// Replace a user's settings
    ///
    /// Fails fast with [`crate::error::MoneyTrackError::InvalidBudgetValue`]
    /// or [`crate::error::MoneyTrackError::InvalidWindowSize`] instead of
    /// silently falling back to defaults.
    pub fn update(&self, user: &UserId, settings: Settings) -> MoneyTrackResult<Settings> {
        settings.validate()?;

        self.storage.settings.put(user, settings.clone())?;
        self.storage.settings.save()?;

        info!(
            user = %user,
            account_budget = settings.account_budget,
            card_budget = settings.card_budget,
            window_size = settings.window_size,
            "settings updated"
        );
        Ok(settings)
    }
}
