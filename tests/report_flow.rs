//! End-to-end flow through storage, services and the engine

use chrono::NaiveDate;
use tempfile::TempDir;

use moneytrack::config::MoneyTrackPaths;
use moneytrack::engine::{build_report, WindowOutcome};
use moneytrack::models::{ExpenseKind, Settings, UserId};
use moneytrack::services::{ExpenseService, SettingsService};
use moneytrack::storage::Storage;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open_storage(dir: &TempDir) -> Storage {
    let paths = MoneyTrackPaths::with_base_dir(dir.path().to_path_buf());
    let mut storage = Storage::new(paths).unwrap();
    storage.load_all().unwrap();
    storage
}

#[test]
fn test_record_persist_and_report() {
    let dir = TempDir::new().unwrap();
    let user = UserId::from("default");

    {
        let storage = open_storage(&dir);
        SettingsService::new(&storage)
            .update(
                &user,
                Settings {
                    account_budget: 15000.0,
                    card_budget: 6000.0,
                    window_size: 10,
                },
            )
            .unwrap();

        let expenses = ExpenseService::new(&storage);
        expenses
            .add(&user, date(2025, 6, 2), 800.0, "Groceries", ExpenseKind::Account)
            .unwrap();
        expenses
            .add(&user, date(2025, 6, 12), 6000.0, "Rent share", ExpenseKind::Account)
            .unwrap();
        expenses
            .add(&user, date(2025, 6, 20), 1500.0, "Online order", ExpenseKind::Card)
            .unwrap();
    }

    // Reopen from disk: everything must round-trip through the JSON files.
    let storage = open_storage(&dir);
    let settings = SettingsService::new(&storage).get(&user).unwrap();
    assert_eq!(settings.window_size, 10);

    let expenses = ExpenseService::new(&storage).list(&user).unwrap();
    assert_eq!(expenses.len(), 3);

    let report = build_report(2025, 6, &settings, &expenses, date(2025, 7, 1)).unwrap();
    assert!(!report.is_empty);

    // June with 10-day windows: 1-10, 11-20, 21-30.
    assert_eq!(report.windows.len(), 3);

    // Window 1-10 budget 5000, spent 800.
    match report.windows[0].outcome {
        WindowOutcome::Saved(saved) => assert!((saved - 4200.0).abs() < 1e-6),
        WindowOutcome::Overflow(_) => panic!("first window should not overflow"),
    }

    // Window 11-20 budget 5000, account spending 6000 (card excluded from windows).
    match report.windows[1].outcome {
        WindowOutcome::Overflow(over) => assert!((over - 1000.0).abs() < 1e-6),
        WindowOutcome::Saved(_) => panic!("second window should overflow"),
    }

    let card = report.card.as_ref().unwrap();
    assert_eq!(card.spent, 1500.0);
    assert_eq!(card.remaining, 4500.0);
}

#[test]
fn test_users_are_isolated() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);
    let expenses = ExpenseService::new(&storage);

    expenses
        .add(
            &UserId::from("alice"),
            date(2025, 6, 2),
            100.0,
            "Coffee",
            ExpenseKind::Account,
        )
        .unwrap();
    expenses
        .add(
            &UserId::from("bob"),
            date(2025, 6, 2),
            200.0,
            "Lunch",
            ExpenseKind::Account,
        )
        .unwrap();

    assert_eq!(expenses.list(&UserId::from("alice")).unwrap().len(), 1);
    assert_eq!(expenses.list(&UserId::from("bob")).unwrap().len(), 1);

    // Clearing one user leaves the other untouched.
    expenses.clear_all(&UserId::from("alice")).unwrap();
    assert!(expenses.list(&UserId::from("alice")).unwrap().is_empty());
    assert_eq!(expenses.list(&UserId::from("bob")).unwrap().len(), 1);
}

#[test]
fn test_clear_month_persists() {
    let dir = TempDir::new().unwrap();
    let user = UserId::from("default");

    {
        let storage = open_storage(&dir);
        let expenses = ExpenseService::new(&storage);
        expenses
            .add(&user, date(2025, 5, 31), 10.0, "May", ExpenseKind::Account)
            .unwrap();
        expenses
            .add(&user, date(2025, 6, 1), 20.0, "June", ExpenseKind::Account)
            .unwrap();
        assert_eq!(expenses.clear_month(&user, 2025, 6).unwrap(), 1);
    }

    let storage = open_storage(&dir);
    let remaining = ExpenseService::new(&storage).list(&user).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].description, "May");
}
