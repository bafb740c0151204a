//! MoneyTrack - Budget window accounting from the command line
//!
//! MoneyTrack partitions each month into fixed-size budget windows,
//! spreads a monthly budget across them, and tracks expenses against the
//! window, day and month budgets. A separate card budget is tracked per
//! full month.
//!
//! # Architecture
//!
//! - [`models`] - Core domain types (expenses, settings, windows)
//! - [`engine`] - Pure window partitioning, allocation and evaluation
//! - [`storage`] - JSON file persistence with atomic writes
//! - [`services`] - Business logic connecting storage and engine
//! - [`display`] - Terminal output formatting
//! - [`cli`] - Command handlers
//! - [`config`] - Data directory resolution

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MoneyTrackError, MoneyTrackResult};
