//! Expense model
//!
//! An expense is immutable once recorded: the engine only ever reads it, and
//! removal happens through the bulk clear operations on the store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use crate::error::{MoneyTrackError, MoneyTrackResult};

/// Description used when the user submits an expense with a blank description
pub const DEFAULT_DESCRIPTION: &str = "Fixed expense";

/// Which budget an expense counts against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    /// Counts toward the windowed account budget
    #[default]
    Account,
    /// Counts toward the whole-month card budget only
    Card,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Card => write!(f, "card"),
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// Amount spent (always positive)
    pub amount: f64,

    /// Free-text description
    pub description: String,

    /// Which budget this counts against
    #[serde(rename = "type")]
    pub kind: ExpenseKind,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    ///
    /// A blank or whitespace-only description falls back to
    /// [`DEFAULT_DESCRIPTION`]. The amount must be strictly positive.
    pub fn new(
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        kind: ExpenseKind,
    ) -> MoneyTrackResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(MoneyTrackError::Validation(format!(
                "Expense amount must be positive, got {}",
                amount
            )));
        }

        let description = description.into();
        let description = if description.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description.trim().to_string()
        };

        Ok(Self {
            id: ExpenseId::new(),
            date,
            amount,
            description,
            kind,
            created_at: Utc::now(),
        })
    }

    /// Check whether this expense counts toward the windowed account budget
    pub fn is_account(&self) -> bool {
        self.kind == ExpenseKind::Account
    }

    /// Check whether this expense counts toward the monthly card budget
    pub fn is_card(&self) -> bool {
        self.kind == ExpenseKind::Card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let exp = Expense::new(date(2024, 3, 3), 200.0, "Groceries", ExpenseKind::Account).unwrap();
        assert_eq!(exp.amount, 200.0);
        assert_eq!(exp.description, "Groceries");
        assert!(exp.is_account());
        assert!(!exp.is_card());
    }

    #[test]
    fn test_blank_description_gets_default() {
        let exp = Expense::new(date(2024, 3, 3), 50.0, "   ", ExpenseKind::Card).unwrap();
        assert_eq!(exp.description, DEFAULT_DESCRIPTION);

        let exp = Expense::new(date(2024, 3, 3), 50.0, "", ExpenseKind::Card).unwrap();
        assert_eq!(exp.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        assert!(Expense::new(date(2024, 3, 3), 0.0, "x", ExpenseKind::Account).is_err());
        assert!(Expense::new(date(2024, 3, 3), -10.0, "x", ExpenseKind::Account).is_err());
        assert!(Expense::new(date(2024, 3, 3), f64::NAN, "x", ExpenseKind::Account).is_err());
    }

    #[test]
    fn test_kind_serialization() {
        let exp = Expense::new(date(2024, 3, 3), 50.0, "Coffee", ExpenseKind::Card).unwrap();
        let json = serde_json::to_string(&exp).unwrap();
        assert!(json.contains("\"type\":\"card\""));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.kind, ExpenseKind::Card);
        assert_eq!(deserialized.date, date(2024, 3, 3));
    }
}
