//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum EloError {
    #[error("Invalid game record at position {index}: {reason}")]
    InvalidGameRecord { index: usize, reason: String },

    #[error("Failed to load game log from {path}: {message}")]
    InputSource { path: String, message: String },

    #[error("Rating calculation failed: {reason}")]
    RatingCalculationFailed { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
