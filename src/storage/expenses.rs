//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Every record is
//! scoped to a user; queries never cross user boundaries.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::Datelike;
use tracing::debug;

use crate::error::MoneyTrackError;
use crate::models::{Expense, ExpenseId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// One persisted expense together with its owning user
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct ExpenseRecord {
    user_id: UserId,
    #[serde(flatten)]
    expense: Expense,
}

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<ExpenseRecord>,
}

/// Repository for expense persistence with a per-user index
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, ExpenseRecord>>,
    /// Index: user_id -> expense_ids
    by_user: RwLock<HashMap<UserId, Vec<ExpenseId>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_user: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build the user index
    pub fn load(&self) -> Result<(), MoneyTrackError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_user.clear();

        for record in file_data.expenses {
            by_user
                .entry(record.user_id.clone())
                .or_default()
                .push(record.expense.id);
            data.insert(record.expense.id, record);
        }

        debug!(count = data.len(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), MoneyTrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| {
            a.user_id
                .as_str()
                .cmp(b.user_id.as_str())
                .then(b.expense.date.cmp(&a.expense.date))
                .then(b.expense.created_at.cmp(&a.expense.created_at))
        });

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// List a user's expenses, newest date first
    pub fn list(&self, user: &UserId) -> Result<Vec<Expense>, MoneyTrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_user = self
            .by_user
            .read()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_user.get(user).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut expenses: Vec<Expense> = ids
            .iter()
            .filter_map(|id| data.get(id).map(|r| r.expense.clone()))
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Record a new expense for a user
    pub fn create(&self, user: &UserId, expense: Expense) -> Result<Expense, MoneyTrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        by_user.entry(user.clone()).or_default().push(expense.id);
        data.insert(
            expense.id,
            ExpenseRecord {
                user_id: user.clone(),
                expense: expense.clone(),
            },
        );

        debug!(user = %user, id = %expense.id, amount = expense.amount, "created expense");
        Ok(expense)
    }

    /// Delete a user's expenses for one month; returns the number removed
    pub fn delete_by_month(
        &self,
        user: &UserId,
        year: i32,
        month: u32,
    ) -> Result<usize, MoneyTrackError> {
        self.delete_where(user, |e| e.date.year() == year && e.date.month() == month)
    }

    /// Delete every expense belonging to a user; returns the number removed
    pub fn delete_all(&self, user: &UserId) -> Result<usize, MoneyTrackError> {
        self.delete_where(user, |_| true)
    }

    fn delete_where<F>(&self, user: &UserId, predicate: F) -> Result<usize, MoneyTrackError>
    where
        F: Fn(&Expense) -> bool,
    {
        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let Some(ids) = by_user.get_mut(user) else {
            return Ok(0);
        };

        let mut removed = 0;
        ids.retain(|id| {
            let matches = data.get(id).map(|r| predicate(&r.expense)).unwrap_or(false);
            if matches {
                data.remove(id);
                removed += 1;
            }
            !matches
        });

        debug!(user = %user, removed, "deleted expenses");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(y: i32, m: u32, d: u32, amount: f64) -> Expense {
        Expense::new(date(y, m, d), amount, "test", ExpenseKind::Account).unwrap()
    }

    fn repo_in(dir: &TempDir) -> ExpenseRepository {
        ExpenseRepository::new(dir.path().join("expenses.json"))
    }

    #[test]
    fn test_create_and_list_scoped_by_user() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");

        repo.create(&alice, expense(2025, 6, 1, 100.0)).unwrap();
        repo.create(&alice, expense(2025, 6, 2, 200.0)).unwrap();
        repo.create(&bob, expense(2025, 6, 3, 300.0)).unwrap();

        assert_eq!(repo.list(&alice).unwrap().len(), 2);
        assert_eq!(repo.list(&bob).unwrap().len(), 1);
        assert!(repo.list(&UserId::from("nobody")).unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        let user = UserId::from("default");

        repo.create(&user, expense(2025, 6, 1, 1.0)).unwrap();
        repo.create(&user, expense(2025, 6, 15, 2.0)).unwrap();
        repo.create(&user, expense(2025, 6, 8, 3.0)).unwrap();

        let dates: Vec<NaiveDate> = repo.list(&user).unwrap().iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 6, 15), date(2025, 6, 8), date(2025, 6, 1)]
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let user = UserId::from("default");

        let repo = repo_in(&temp_dir);
        repo.create(&user, expense(2025, 6, 1, 100.0)).unwrap();
        repo.save().unwrap();

        let repo2 = repo_in(&temp_dir);
        repo2.load().unwrap();
        let loaded = repo2.list(&user).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].amount, 100.0);
        assert_eq!(loaded[0].date, date(2025, 6, 1));
    }

    #[test]
    fn test_delete_by_month() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        let user = UserId::from("default");

        repo.create(&user, expense(2025, 5, 30, 1.0)).unwrap();
        repo.create(&user, expense(2025, 6, 1, 2.0)).unwrap();
        repo.create(&user, expense(2025, 6, 20, 3.0)).unwrap();

        let removed = repo.delete_by_month(&user, 2025, 6).unwrap();
        assert_eq!(removed, 2);

        let remaining = repo.list(&user).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].date, date(2025, 5, 30));
    }

    #[test]
    fn test_delete_all_leaves_other_users_alone() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");

        repo.create(&alice, expense(2025, 6, 1, 1.0)).unwrap();
        repo.create(&alice, expense(2025, 6, 2, 2.0)).unwrap();
        repo.create(&bob, expense(2025, 6, 3, 3.0)).unwrap();

        assert_eq!(repo.delete_all(&alice).unwrap(), 2);
        assert!(repo.list(&alice).unwrap().is_empty());
        assert_eq!(repo.list(&bob).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_for_unknown_user_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        assert_eq!(repo.delete_all(&UserId::from("nobody")).unwrap(), 0);
    }
}
