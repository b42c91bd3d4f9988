//! Centralized error types for the Freshtab application.
//!
//! Provides a typed error hierarchy with user-friendly messages suitable
//! for display, while preserving full context for logging.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range: {0}")]
    LongitudeOutOfRange(f64),

    #[error("Forecast days must be at least 1")]
    ZeroForecastDays,
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::InvalidEndpoint(_) => "The weather service address is invalid.",
            ConfigError::InvalidTimezone(_) => "The configured timezone is invalid.",
            ConfigError::LatitudeOutOfRange(_) | ConfigError::LongitudeOutOfRange(_) => {
                "The fallback location is not a valid coordinate."
            }
            ConfigError::ZeroForecastDays => "At least one forecast day is required.",
        }
    }
}
