//! Period evaluator
//!
//! Combines the allocator and the aggregator into remaining/overflow figures
//! for the current window, the current day, and the current month. Every
//! function takes "now" explicitly; nothing in the engine reads a clock.

use chrono::{Datelike, NaiveDate};

use crate::error::MoneyTrackResult;
use crate::models::{Expense, ExpenseKind, Settings, Window};

use super::aggregate::{expenses_for_date, expenses_for_month, expenses_for_window, total};
use super::allocator::{daily_budget, window_budget};
use super::calendar::days_in_month;
use super::partition::current_window;

/// Percent-used at which the daily view turns into a warning
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

/// Budget, spent and remaining for one period
///
/// Negative `remaining` means overflow. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodFigures {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl PeriodFigures {
    /// Derive figures from a budget and the amount spent against it
    pub fn new(budget: f64, spent: f64) -> Self {
        Self {
            budget,
            spent,
            remaining: budget - spent,
        }
    }

    /// True when spending exceeded the budget
    pub fn is_overflow(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Figures for the window containing "now"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFigures {
    pub window: Window,
    /// Zero-based position of the window within its month
    pub index: usize,
    pub figures: PeriodFigures,
}

/// Where a window sits relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// The window ended before today
    Past,
    /// Today falls inside the window
    Current,
    /// The window has not started yet
    Future,
}

/// Classify a window of the given month against "now"
pub fn window_state(window: &Window, year: i32, month: u32, now: NaiveDate) -> WindowState {
    match (year, month).cmp(&(now.year(), now.month())) {
        std::cmp::Ordering::Less => WindowState::Past,
        std::cmp::Ordering::Greater => WindowState::Future,
        std::cmp::Ordering::Equal => {
            let day = now.day();
            if day > window.end {
                WindowState::Past
            } else if day < window.start {
                WindowState::Future
            } else {
                WindowState::Current
            }
        }
    }
}

/// Traffic-light classification of the daily limit view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Comfortably under the daily limit
    Ok,
    /// 80% or more of the daily limit used
    Warning,
    /// Daily limit exceeded
    Over,
}

/// Daily limit view for "now"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyFigures {
    /// Account budget spread over the days of the month
    pub limit: f64,
    /// Account spending recorded today
    pub spent: f64,
    pub remaining: f64,
    /// Raw percent of the limit used; may exceed 100
    pub percent_used: f64,
    pub status: DayStatus,
}

impl DailyFigures {
    /// Percent used clamped to [0, 100], for progress bars only
    pub fn progress_percent(&self) -> f64 {
        self.percent_used.clamp(0.0, 100.0)
    }
}

/// Figures for the window containing `today`
pub fn current_window_figures(
    settings: &Settings,
    expenses: &[Expense],
    today: NaiveDate,
) -> MoneyTrackResult<WindowFigures> {
    let (window, index) = current_window(today, settings.window_size)?;
    let days = days_in_month(today.year(), today.month());
    let daily = daily_budget(settings.account_budget, days)?;
    let budget = window_budget(&window, daily);
    let spent = total(expenses_for_window(
        expenses,
        &window,
        today.year(),
        today.month(),
    ));

    Ok(WindowFigures {
        window,
        index,
        figures: PeriodFigures::new(budget, spent),
    })
}

/// Account figures for the month containing `today`
pub fn month_account_figures(
    settings: &Settings,
    expenses: &[Expense],
    today: NaiveDate,
) -> PeriodFigures {
    let spent = total(expenses_for_month(
        expenses,
        today.year(),
        today.month(),
        Some(ExpenseKind::Account),
    ));
    PeriodFigures::new(settings.account_budget, spent)
}

/// Card figures for the month containing `today`
///
/// The card budget is never windowed; it is evaluated per full month.
pub fn month_card_figures(
    settings: &Settings,
    expenses: &[Expense],
    today: NaiveDate,
) -> PeriodFigures {
    let spent = total(expenses_for_month(
        expenses,
        today.year(),
        today.month(),
        Some(ExpenseKind::Card),
    ));
    PeriodFigures::new(settings.card_budget, spent)
}

/// Daily limit view for `today`
///
/// A zero or negative account budget yields a zero limit and zero percent
/// rather than NaN; the raw (unclamped) percentage drives the `Over`
/// classification while clamping is left to [`DailyFigures::progress_percent`].
pub fn daily_figures(settings: &Settings, expenses: &[Expense], today: NaiveDate) -> DailyFigures {
    let days = days_in_month(today.year(), today.month());
    let limit = if settings.account_budget.is_finite() && settings.account_budget > 0.0 {
        settings.account_budget / f64::from(days)
    } else {
        0.0
    };

    let spent = total(
        expenses_for_date(expenses, today)
            .into_iter()
            .filter(|e| e.is_account()),
    );
    let remaining = limit - spent;
    let percent_used = if limit > 0.0 {
        spent / limit * 100.0
    } else {
        0.0
    };

    let status = if remaining < 0.0 {
        DayStatus::Over
    } else if percent_used >= WARNING_THRESHOLD_PERCENT {
        DayStatus::Warning
    } else {
        DayStatus::Ok
    };

    DailyFigures {
        limit,
        spent,
        remaining,
        percent_used,
        status,
    }
}
