//! Per-user budget settings
//!
//! Settings are owned per user and mutated only through the settings service;
//! defaults apply when a user has never saved anything.

use serde::{Deserialize, Serialize};

use crate::error::{MoneyTrackError, MoneyTrackResult};

/// Window sizes the settings update operation accepts
pub const SUPPORTED_WINDOW_SIZES: [u32; 3] = [5, 10, 15];

/// Per-user budget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Monthly account budget, distributed across days and windows
    #[serde(default = "default_account_budget")]
    pub account_budget: f64,

    /// Monthly card budget, evaluated per full month only
    #[serde(default = "default_card_budget")]
    pub card_budget: f64,

    /// Days per budget window
    #[serde(default = "default_window_size")]
    pub window_size: u32,
}

fn default_account_budget() -> f64 {
    10000.0
}

fn default_card_budget() -> f64 {
    5000.0
}

fn default_window_size() -> u32 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            account_budget: default_account_budget(),
            card_budget: default_card_budget(),
            window_size: default_window_size(),
        }
    }
}

impl Settings {
    /// Validate the settings before they are persisted
    ///
    /// Budgets must be strictly positive and the window size must come from
    /// [`SUPPORTED_WINDOW_SIZES`]. Invalid settings fail fast rather than
    /// being silently replaced with defaults.
    pub fn validate(&self) -> MoneyTrackResult<()> {
        if !self.account_budget.is_finite() || self.account_budget <= 0.0 {
            return Err(MoneyTrackError::InvalidBudgetValue {
                amount: self.account_budget,
            });
        }
        if !self.card_budget.is_finite() || self.card_budget <= 0.0 {
            return Err(MoneyTrackError::InvalidBudgetValue {
                amount: self.card_budget,
            });
        }
        if !SUPPORTED_WINDOW_SIZES.contains(&self.window_size) {
            return Err(MoneyTrackError::InvalidWindowSize {
                size: self.window_size,
            });
        }
        Ok(())
    }
}
