//! Core data models for MoneyTrack
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, per-user settings, and budget windows.

pub mod expense;
pub mod ids;
pub mod settings;
pub mod window;

pub use expense::{Expense, ExpenseKind, DEFAULT_DESCRIPTION};
pub use ids::{ExpenseId, UserId};
pub use settings::{Settings, SUPPORTED_WINDOW_SIZES};
pub use window::Window;
