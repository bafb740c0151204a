//! Expense aggregation
//!
//! Filters and sums one user's expense records by month, window, day, and
//! type. All queries are total over well-formed input: no match means an empty
//! result or a zero total, never an error. The caller supplies the expense
//! slice; no store access happens here.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, ExpenseKind, Window};

/// Account expenses falling inside a window of the given month
///
/// Card expenses are excluded from windowed views by design: cards are tracked
/// only at month granularity.
pub fn expenses_for_window<'a>(
    expenses: &'a [Expense],
    window: &Window,
    year: i32,
    month: u32,
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| {
            e.date.year() == year
                && e.date.month() == month
                && window.contains_day(e.date.day())
                && e.is_account()
        })
        .collect()
}

/// All expenses on an exact calendar date, any type
pub fn expenses_for_date<'a>(expenses: &'a [Expense], date: NaiveDate) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| e.date == date).collect()
}

/// Expenses in a month, optionally restricted to one type
pub fn expenses_for_month<'a>(
    expenses: &'a [Expense],
    year: i32,
    month: u32,
    kind: Option<ExpenseKind>,
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| {
            e.date.year() == year
                && e.date.month() == month
                && kind.map_or(true, |k| e.kind == k)
        })
        .collect()
}

/// Sum of expense amounts; 0.0 for an empty sequence
pub fn total<'a, I>(expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}
