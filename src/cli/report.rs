//! Status and report CLI commands

use chrono::{Datelike, NaiveDate};

use crate::display::{format_report, format_status};
use crate::engine::{
    build_report, current_window_figures, daily_figures, month_account_figures, month_card_figures,
};
use crate::error::MoneyTrackResult;
use crate::models::UserId;
use crate::services::{ExpenseService, SettingsService};
use crate::storage::Storage;

use super::parse_month;

/// Handle the `status` command: the current-window dashboard
pub fn handle_status(storage: &Storage, user: &UserId, today: NaiveDate) -> MoneyTrackResult<()> {
    let settings = SettingsService::new(storage).get(user)?;
    let expenses = ExpenseService::new(storage).list(user)?;

    let window = current_window_figures(&settings, &expenses, today)?;
    let account = month_account_figures(&settings, &expenses, today);
    let card = month_card_figures(&settings, &expenses, today);
    let daily = daily_figures(&settings, &expenses, today);

    print!("{}", format_status(today, &window, &account, &card, &daily));
    Ok(())
}

/// Handle the `report` command for one month (defaults to the current month)
pub fn handle_report(
    storage: &Storage,
    user: &UserId,
    month: Option<String>,
    today: NaiveDate,
) -> MoneyTrackResult<()> {
    let (year, month) = match month {
        Some(m) => parse_month(&m)?,
        None => (today.year(), today.month()),
    };

    let settings = SettingsService::new(storage).get(user)?;
    let expenses = ExpenseService::new(storage).list(user)?;
    let report = build_report(year, month, &settings, &expenses, today)?;

    print!("{}", format_report(&report));
    Ok(())
}
