//! # Forecast Report
//!
//! Forecasts the missing final period of a series with three smoothing
//! methods and reports which one fits the observed history best.
//!
//! ## Features
//!
//! - Simple, weighted and exponential moving averages from `smoothing_math`
//! - Mean squared error per method over the observed periods
//! - Best-method selection with a fixed SMA, WMA, EMA tie-break
//! - Per-period table and summary, as text or JSON
//! - TOML configuration of the window and smoothing factor
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_report::data::nepse_sample;
//! use forecast_report::{run_forecast, ForecastConfig};
//! use smoothing_math::Method;
//!
//! let series = nepse_sample()?;
//! let run = run_forecast(&series, &ForecastConfig::default())?;
//!
//! assert_eq!(run.best(), Method::Wma);
//! println!("{}", run.report());
//! # Ok::<(), forecast_report::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod run;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::error::{ForecastError, Result};
pub use crate::report::{ForecastReport, ForecastTable};
pub use crate::run::{run_forecast, ForecastRun};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
