//! Expense CLI commands
//!
//! Implements `add`, `today` and `clear`: recording expenses, the daily
//! spending view, and removing data.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_currency;
use crate::engine::{daily_figures, expenses_for_date, DayStatus};
use crate::error::MoneyTrackResult;
use crate::models::{ExpenseKind, UserId};
use crate::services::{ExpenseService, SettingsService};
use crate::storage::Storage;

use super::parse_month;

/// Clear subcommands
#[derive(Subcommand)]
pub enum ClearCommands {
    /// Remove expenses for one month
    Month {
        /// Month to clear (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },

    /// Remove all expenses and reset settings
    All,
}

/// Handle the `add` command
pub fn handle_add(
    storage: &Storage,
    user: &UserId,
    date: NaiveDate,
    amount: f64,
    description: Option<String>,
    card: bool,
) -> MoneyTrackResult<()> {
    let kind = if card {
        ExpenseKind::Card
    } else {
        ExpenseKind::Account
    };
    let service = ExpenseService::new(storage);
    let expense = service.add(user, date, amount, description.unwrap_or_default(), kind)?;

    println!(
        "Recorded {} ({}) on {}: {}",
        format_currency(expense.amount),
        expense.kind,
        expense.date,
        expense.description
    );
    Ok(())
}

/// Handle the `today` command
pub fn handle_today(storage: &Storage, user: &UserId, today: NaiveDate) -> MoneyTrackResult<()> {
    let settings = SettingsService::new(storage).get(user)?;
    let expenses = ExpenseService::new(storage).list(user)?;
    let figures = daily_figures(&settings, &expenses, today);

    println!("Today ({})", today.format("%a, %-d %b %Y"));
    println!(
        "  Daily limit {} | spent {} | remaining {}",
        format_currency(figures.limit),
        format_currency(figures.spent),
        format_currency(figures.remaining)
    );
    if figures.status == DayStatus::Over {
        println!("  Over the daily limit!");
    }

    let todays = expenses_for_date(&expenses, today);
    if todays.is_empty() {
        println!("\nNo expenses recorded today.");
    } else {
        println!();
        for expense in todays {
            println!(
                "  {:<28} {:>10}  ({})",
                expense.description,
                format_currency(expense.amount),
                expense.kind
            );
        }
    }
    Ok(())
}

/// Handle a clear command
pub fn handle_clear_command(
    storage: &Storage,
    user: &UserId,
    today: NaiveDate,
    cmd: ClearCommands,
) -> MoneyTrackResult<()> {
    use chrono::Datelike;

    let service = ExpenseService::new(storage);
    match cmd {
        ClearCommands::Month { month } => {
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => (today.year(), today.month()),
            };
            let removed = service.clear_month(user, year, month)?;
            println!("Removed {} expense(s) for {}-{:02}", removed, year, month);
        }
        ClearCommands::All => {
            let removed = service.clear_all(user)?;
            println!("Removed {} expense(s) and reset settings", removed);
        }
    }
    Ok(())
}
