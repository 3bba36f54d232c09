//! # Smoothing Math
//!
//! Smoothing estimators for a single missing tail value of a time series.
//! This crate provides the three classic moving averages (simple, weighted
//! and exponential), their one-period forecast rules, squared-error scoring
//! and the selection of the best-fitting method.
//!
//! ```
//! use smoothing_math::series::Series;
//! use smoothing_math::selection::{select_best, Method, MethodResult};
//!
//! let series = Series::from_values(
//!     ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
//!     [Some(10.0), Some(12.0), Some(11.0), Some(13.0), Some(12.0), None],
//! )?;
//!
//! let results = Method::ALL
//!     .iter()
//!     .map(|&method| MethodResult::evaluate(method, &series, 2, 0.5))
//!     .collect::<smoothing_math::Result<Vec<_>>>()?;
//!
//! assert!(select_best(&results).is_some());
//! # Ok::<(), smoothing_math::SmoothingError>(())
//! ```

use thiserror::Error;

pub mod moving_averages;
pub mod scoring;
pub mod selection;
pub mod series;

/// Errors that can occur while smoothing or scoring a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmoothingError {
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Invalid alpha: {0}")]
    InvalidAlpha(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Insufficient history: {0}")]
    InsufficientHistory(String),

    #[error("No scorable points: {0}")]
    NoScorablePoints(String),

    #[error("Malformed series: {0}")]
    MalformedSeries(String),
}

/// Result type for smoothing operations
pub type Result<T> = std::result::Result<T, SmoothingError>;

pub use moving_averages::{compute_ema, compute_sma, compute_wma, compute_wma_with_weights};
pub use scoring::{score, ErrorSeries, Score, ScoredPoint};
pub use selection::{select_best, Method, MethodResult};
pub use series::{Observation, Series, SmoothedSeries};
