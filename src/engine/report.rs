//! Report builder
//!
//! Walks all windows of a target month and produces a structured summary:
//! card budget totals, per-window figures, and per-day expense listings. Pure
//! function of its inputs; "now" is passed in explicitly so reports are
//! deterministic and testable.

use chrono::{Datelike, NaiveDate};

use crate::error::MoneyTrackResult;
use crate::models::{Expense, ExpenseKind, Settings, Window};

use super::aggregate::{expenses_for_date, expenses_for_month, expenses_for_window, total};
use super::allocator::{daily_budget, window_budget};
use super::calendar::days_in_month;
use super::evaluator::PeriodFigures;
use super::partition::compute_windows;

/// One expense as listed in a day entry
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine {
    pub description: String,
    pub amount: f64,
    pub kind: ExpenseKind,
}

impl From<&Expense> for ExpenseLine {
    fn from(e: &Expense) -> Self {
        Self {
            description: e.description.clone(),
            amount: e.amount,
            kind: e.kind,
        }
    }
}

/// All expenses recorded on one day, in their original insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub expenses: Vec<ExpenseLine>,
}

/// How a window period ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowOutcome {
    /// Remaining budget (non-negative)
    Saved(f64),
    /// Amount spent beyond the budget (positive)
    Overflow(f64),
}

impl WindowOutcome {
    fn from_remaining(remaining: f64) -> Self {
        if remaining < 0.0 {
            Self::Overflow(-remaining)
        } else {
            Self::Saved(remaining)
        }
    }
}

/// Summary of one budget window within the report month
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSection {
    pub window: Window,
    pub budget: f64,
    pub spent: f64,
    pub outcome: WindowOutcome,
    /// Days inside the window that have at least one expense
    pub days: Vec<DayEntry>,
}

/// Whole-month card budget summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSummary {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

/// Structured monthly report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    /// Present unless the month has no expenses at all
    pub card: Option<CardSummary>,
    pub windows: Vec<WindowSection>,
    /// True when the month has zero expenses; takes precedence over everything
    pub is_empty: bool,
}

/// Build the report for a target month
///
/// Windows that have not started yet are skipped, but only when the target
/// month is the month containing `today`; past and future months show every
/// window. A month with zero expenses collapses to the empty state with the
/// card summary suppressed as well.
pub fn build_report(
    year: i32,
    month: u32,
    settings: &Settings,
    expenses: &[Expense],
    today: NaiveDate,
) -> MoneyTrackResult<MonthReport> {
    let month_expenses = expenses_for_month(expenses, year, month, None);
    if month_expenses.is_empty() {
        return Ok(MonthReport {
            year,
            month,
            card: None,
            windows: Vec::new(),
            is_empty: true,
        });
    }

    let card_figures = PeriodFigures::new(
        settings.card_budget,
        total(expenses_for_month(expenses, year, month, Some(ExpenseKind::Card))),
    );
    let card = CardSummary {
        budget: card_figures.budget,
        spent: card_figures.spent,
        remaining: card_figures.remaining,
    };

    let days = days_in_month(year, month);
    let daily = daily_budget(settings.account_budget, days)?;
    let is_current_month = year == today.year() && month == today.month();

    let mut windows = Vec::new();
    for window in compute_windows(year, month, settings.window_size)? {
        // Future windows are not shown while the month is still in progress.
        if is_current_month && today.day() < window.start {
            continue;
        }

        let budget = window_budget(&window, daily);
        let spent = total(expenses_for_window(expenses, &window, year, month));
        let remaining = budget - spent;

        let mut day_entries = Vec::new();
        for day in window.start..=window.end {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .expect("window days never exceed the month length");
            let day_expenses: Vec<ExpenseLine> = expenses_for_date(expenses, date)
                .into_iter()
                .map(ExpenseLine::from)
                .collect();
            if !day_expenses.is_empty() {
                day_entries.push(DayEntry {
                    date,
                    expenses: day_expenses,
                });
            }
        }

        windows.push(WindowSection {
            window,
            budget,
            spent,
            outcome: WindowOutcome::from_remaining(remaining),
            days: day_entries,
        });
    }

    Ok(MonthReport {
        year,
        month,
        card: Some(card),
        windows,
        is_empty: false,
    })
}
