//! Settings CLI commands

use clap::Subcommand;

use crate::display::format_currency;
use crate::error::MoneyTrackResult;
use crate::models::{Settings, UserId, SUPPORTED_WINDOW_SIZES};
use crate::services::SettingsService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current budget settings
    Show,

    /// Update budget settings; unspecified fields keep their current value
    Set {
        /// Monthly account budget
        #[arg(long)]
        account_budget: Option<f64>,

        /// Monthly card budget
        #[arg(long)]
        card_budget: Option<f64>,

        /// Days per budget window (5, 10 or 15)
        #[arg(long)]
        window_size: Option<u32>,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    user: &UserId,
    cmd: SettingsCommands,
) -> MoneyTrackResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            print_settings(&service.get(user)?);
        }
        SettingsCommands::Set {
            account_budget,
            card_budget,
            window_size,
        } => {
            let mut settings = service.get(user)?;
            if let Some(budget) = account_budget {
                settings.account_budget = budget;
            }
            if let Some(budget) = card_budget {
                settings.card_budget = budget;
            }
            if let Some(size) = window_size {
                settings.window_size = size;
            }

            let updated = service.update(user, settings)?;
            println!("Settings updated");
            print_settings(&updated);
        }
    }
    Ok(())
}

fn print_settings(settings: &Settings) {
    println!(
        "Account budget: {}",
        format_currency(settings.account_budget)
    );
    println!("Card budget:    {}", format_currency(settings.card_budget));
    println!(
        "Window size:    {} days (supported: {:?})",
        settings.window_size, SUPPORTED_WINDOW_SIZES
    );
}
