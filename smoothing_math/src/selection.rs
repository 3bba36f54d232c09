//! Method results and best-method selection

use crate::moving_averages::{compute_ema, compute_sma, compute_wma};
use crate::scoring::{score, ErrorSeries, Score};
use crate::series::{Series, SmoothedSeries};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Smoothing method, declared in tie-break priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "SMA")]
    Sma,
    #[serde(rename = "WMA")]
    Wma,
    #[serde(rename = "EMA")]
    Ema,
}

impl Method {
    /// All methods in priority order
    pub const ALL: [Method; 3] = [Method::Sma, Method::Wma, Method::Ema];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Sma => "SMA",
            Method::Wma => "WMA",
            Method::Ema => "EMA",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Method::Sma => "Simple Moving Average",
            Method::Wma => "Weighted Moving Average",
            Method::Ema => "Exponential Moving Average",
        }
    }

    /// Smooth `series` with this method; SMA and WMA use `window`, EMA uses `alpha`
    pub fn smooth(&self, series: &Series, window: usize, alpha: f64) -> Result<SmoothedSeries> {
        match self {
            Method::Sma => compute_sma(series, window),
            Method::Wma => compute_wma(series, window),
            Method::Ema => compute_ema(series, alpha),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Smoothed values and their score for one method over one series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    pub method: Method,
    pub smoothed: SmoothedSeries,
    pub score: Score,
}

impl MethodResult {
    /// Smooth and score `series` with `method`
    pub fn evaluate(method: Method, series: &Series, window: usize, alpha: f64) -> Result<Self> {
        let smoothed = method.smooth(series, window, alpha)?;
        let score = score(series, &smoothed)?;

        debug!(%method, mse = score.mse, "evaluated method");

        Ok(Self {
            method,
            smoothed,
            score,
        })
    }

    pub fn mse(&self) -> f64 {
        self.score.mse
    }

    pub fn errors(&self) -> &ErrorSeries {
        &self.score.errors
    }

    /// The method's value for the final period
    pub fn forecast(&self) -> Option<f64> {
        self.smoothed.forecast()
    }
}

/// Pick the method with the smallest MSE
///
/// Equal MSEs go to the method earlier in [`Method::ALL`], whatever the order
/// of `results`. Returns `None` for an empty slice.
pub fn select_best(results: &[MethodResult]) -> Option<Method> {
    let best = results
        .iter()
        .min_by(|a, b| a.mse().total_cmp(&b.mse()).then(a.method.cmp(&b.method)))
        .map(|r| r.method);

    if let Some(method) = best {
        debug!(%method, "selected best method");
    }
    best
}
