//! Storage layer for MoneyTrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The engine never touches this layer directly; services load a
//! user's data here and hand plain values to the engine.

pub mod expenses;
pub mod file_io;
pub mod settings;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use settings::SettingsRepository;

use crate::config::paths::MoneyTrackPaths;
use crate::error::MoneyTrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: MoneyTrackPaths,
    pub expenses: ExpenseRepository,
    pub settings: SettingsRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MoneyTrackPaths) -> Result<Self, MoneyTrackError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MoneyTrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), MoneyTrackError> {
        self.expenses.load()?;
        self.settings.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), MoneyTrackError> {
        self.expenses.save()?;
        self.settings.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        storage.save_all().unwrap();
    }
}
