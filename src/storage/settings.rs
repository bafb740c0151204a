//! Settings repository for JSON storage
//!
//! One settings row per user; a user who never saved settings gets the
//! defaults back, mirroring how a fresh install behaves.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::MoneyTrackError;
use crate::models::{Settings, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable settings data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SettingsData {
    settings: HashMap<UserId, Settings>,
}

/// Repository for per-user settings persistence
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, Settings>>,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load settings from disk
    pub fn load(&self) -> Result<(), MoneyTrackError> {
        let file_data: SettingsData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.settings;

        debug!(users = data.len(), "loaded settings");
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), MoneyTrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = SettingsData {
            settings: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a user's settings, falling back to defaults when absent
    pub fn get(&self, user: &UserId) -> Result<Settings, MoneyTrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(user).cloned().unwrap_or_default())
    }

    /// Store a user's settings
    pub fn put(&self, user: &UserId, settings: Settings) -> Result<(), MoneyTrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(user.clone(), settings);
        debug!(user = %user, "updated settings");
        Ok(())
    }

    /// Drop a user's settings row (used by the full clear operation)
    pub fn remove(&self, user: &UserId) -> Result<(), MoneyTrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.remove(user);
        Ok(())
    }
}
