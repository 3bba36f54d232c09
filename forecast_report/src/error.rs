//! Error types for the forecast_report crate

use smoothing_math::SmoothingError;
use thiserror::Error;

/// Custom error types for the forecast_report crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error from smoothing, scoring or selection
    #[error("Smoothing error: {0}")]
    Smoothing(#[from] SmoothingError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from parsing a TOML configuration document
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
