//! # NEPSE Forecast
//!
//! `nepse_forecast` bundles the smoothing library and the forecast report.
//!
//! ## Example
//!
//! ```
//! use nepse_forecast::math::Method;
//! use nepse_forecast::report::{data::nepse_sample, run_forecast, ForecastConfig};
//!
//! let series = nepse_sample()?;
//! let run = run_forecast(&series, &ForecastConfig::default())?;
//! assert_eq!(run.best(), Method::Wma);
//! # Ok::<(), nepse_forecast::report::ForecastError>(())
//! ```

/// Smoothing estimators, scoring and method selection
pub use smoothing_math as math;

/// Forecast runs, configuration and reporting
pub use forecast_report as report;
