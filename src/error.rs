//! Custom error types for MoneyTrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for MoneyTrack operations
#[derive(Error, Debug)]
pub enum MoneyTrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Window size is zero or not one of the supported sizes
    #[error("Invalid window size: {size} (supported: 5, 10, 15)")]
    InvalidWindowSize { size: u32 },

    /// A monthly budget figure must be positive before it can be distributed
    #[error("Invalid budget value: {amount}")]
    InvalidBudgetValue { amount: f64 },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MoneyTrackError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from a bad window size or budget figure
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidWindowSize { .. } | Self::InvalidBudgetValue { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MoneyTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoneyTrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for MoneyTrack operations
pub type MoneyTrackResult<T> = Result<T, MoneyTrackError>;
