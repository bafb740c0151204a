//! Expense service
//!
//! Business logic for recording and clearing expenses. Every operation is
//! scoped to the user supplied by the caller's auth context.

use chrono::NaiveDate;
use tracing::info;

use crate::error::MoneyTrackResult;
use crate::models::{Expense, ExpenseKind, UserId};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// Validation (positive amount, description fallback) happens in
    /// [`Expense::new`]; the record is persisted immediately.
    pub fn add(
        &self,
        user: &UserId,
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        kind: ExpenseKind,
    ) -> MoneyTrackResult<Expense> {
        let expense = Expense::new(date, amount, description, kind)?;
        let expense = self.storage.expenses.create(user, expense)?;
        self.storage.expenses.save()?;

        info!(user = %user, kind = %expense.kind, amount = expense.amount, "expense recorded");
        Ok(expense)
    }

    /// All of a user's expenses, newest date first
    pub fn list(&self, user: &UserId) -> MoneyTrackResult<Vec<Expense>> {
        self.storage.expenses.list(user)
    }

    /// Remove a user's expenses for one month; returns the number removed
    pub fn clear_month(&self, user: &UserId, year: i32, month: u32) -> MoneyTrackResult<usize> {
        let removed = self.storage.expenses.delete_by_month(user, year, month)?;
        self.storage.expenses.save()?;

        info!(user = %user, year, month, removed, "month cleared");
        Ok(removed)
    }

    /// Remove all of a user's expenses and reset their settings
    pub fn clear_all(&self, user: &UserId) -> MoneyTrackResult<usize> {
        let removed = self.storage.expenses.delete_all(user)?;
        self.storage.settings.remove(user)?;
        self.storage.expenses.save()?;
        self.storage.settings.save()?;

        info!(user = %user, removed, "all data cleared");
        Ok(removed)
    }
}
