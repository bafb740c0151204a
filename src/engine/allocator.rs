//! Budget allocator
//!
//! Derives per-day and per-window allocations from a monthly budget figure.
//! Allocation is real-valued; rounding happens only at display time. Only the
//! account budget is distributed this way, the card budget stays month-sized.

use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::models::Window;

/// Daily budget for a month: `monthly_budget / days_in_month`
///
/// # Errors
///
/// Returns [`MoneyTrackError::InvalidBudgetValue`] for a non-positive or
/// non-finite monthly budget, instead of producing NaN downstream.
pub fn daily_budget(monthly_budget: f64, days_in_month: u32) -> MoneyTrackResult<f64> {
    if !monthly_budget.is_finite() || monthly_budget <= 0.0 {
        return Err(MoneyTrackError::InvalidBudgetValue {
            amount: monthly_budget,
        });
    }
    Ok(monthly_budget / f64::from(days_in_month))
}

/// Budget for a window at the given daily rate
pub fn window_budget(window: &Window, daily_budget: f64) -> f64 {
    daily_budget * f64::from(window.days())
}
