//! Business logic layer
//!
//! Services connect the storage layer to the engine: they load and persist a
//! user's data and validate input, while all derived figures come from
//! [`crate::engine`].

pub mod expense;
pub mod settings;

pub use expense::ExpenseService;
pub use settings::SettingsService;
