//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod report;
pub mod settings;

pub use expense::{handle_add, handle_clear_command, handle_today, ClearCommands};
pub use report::{handle_report, handle_status};
pub use settings::{handle_settings_command, SettingsCommands};

use crate::error::{MoneyTrackError, MoneyTrackResult};

/// Parse a "YYYY-MM" month argument
pub fn parse_month(input: &str) -> MoneyTrackResult<(i32, u32)> {
    let parse = || {
        let (year, month) = input.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        (1..=12).contains(&month).then_some((year, month))
    };
    parse().ok_or_else(|| {
        MoneyTrackError::Validation(format!("Invalid month '{}' (expected YYYY-MM)", input))
    })
}
