//! Moving average calculation implementations
//!
//! Contains the three smoothing estimators and their tail forecasts:
//! - Simple Moving Average (SMA)
//! - Weighted Moving Average (WMA)
//! - Exponential Moving Average (EMA)
//!
//! Each estimator has an incremental form fed one value at a time, and a
//! `compute_*` function that runs it over a [`Series`]. When the series ends
//! in an absent period, the `compute_*` functions append that method's
//! forecast for it:
//! - SMA: mean of the last `window` smoothed SMA values
//! - WMA: the weighted formula over the last `window` observed values
//! - EMA: one update step using the last observed value and its EMA

use crate::series::{Series, SmoothedSeries};
use crate::{Result, SmoothingError};
use std::collections::VecDeque;
use tracing::debug;

/// Smallest supported window
pub const MIN_WINDOW: usize = 2;

/// Largest supported window
pub const MAX_WINDOW: usize = 6;

/// Default WMA weights for `window`: `[1, 2, 4, ..., 2^(window-1)]`, oldest first
///
/// At a window of 4 this is `[1, 2, 4, 8]`.
pub fn default_weights(window: usize) -> Vec<f64> {
    (0..window).map(|k| 2f64.powi(k as i32)).collect()
}

/// Simple Moving Average (SMA) implementation
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(SmoothingError::InvalidWindow(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
            sum: 0.0,
        })
    }

    /// Update the SMA with a new value
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        self.sum += value;

        if self.values.len() > self.period {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }
    }

    /// Current SMA value, `None` until `period` values have been seen
    pub fn value(&self) -> Option<f64> {
        if self.values.len() < self.period {
            return None;
        }

        Some(self.sum / self.period as f64)
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the SMA, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }
}

/// Weighted Moving Average (WMA) implementation
///
/// Weights are ordered oldest first, so the last weight applies to the most
/// recent value.
#[derive(Debug, Clone)]
pub struct WeightedMovingAverage {
    weights: Vec<f64>,
    weight_sum: f64,
    values: VecDeque<f64>,
}

impl WeightedMovingAverage {
    /// Create a new Weighted Moving Average; the period is the number of weights
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(SmoothingError::InvalidWeights(
                "At least one weight is required".to_string(),
            ));
        }

        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(SmoothingError::InvalidWeights(format!(
                "Weights must be positive and finite, got {}",
                bad
            )));
        }

        let weight_sum = weights.iter().sum();
        let period = weights.len();

        Ok(Self {
            weights,
            weight_sum,
            values: VecDeque::with_capacity(period),
        })
    }

    /// Update the WMA with a new value
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        if self.values.len() > self.period() {
            self.values.pop_front();
        }
    }

    /// Current WMA value, `None` until a full window has been seen
    pub fn value(&self) -> Option<f64> {
        if self.values.len() < self.period() {
            return None;
        }

        let weighted: f64 = self
            .values
            .iter()
            .zip(&self.weights)
            .map(|(v, w)| v * w)
            .sum();

        Some(weighted / self.weight_sum)
    }

    pub fn period(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Reset the WMA, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
    }
}

/// Exponential Moving Average (EMA) implementation
///
/// Seeded with the first value seen; every later value moves the average
/// by `alpha` times its distance from the current average.
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    alpha: f64,
    current_ema: Option<f64>,
}

impl ExponentialMovingAverage {
    /// Create a new Exponential Moving Average with smoothing factor `alpha`
    pub fn new(alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;

        Ok(Self {
            alpha,
            current_ema: None,
        })
    }

    /// The EMA that `value` would produce, without updating
    pub fn project(&self, value: f64) -> f64 {
        match self.current_ema {
            None => value,
            Some(current) => current + self.alpha * (value - current),
        }
    }

    /// Update the EMA with a new value
    pub fn update(&mut self, value: f64) {
        self.current_ema = Some(self.project(value));
    }

    /// Current EMA value, `None` before the seed value
    pub fn value(&self) -> Option<f64> {
        self.current_ema
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Reset the EMA, dropping the seed
    pub fn reset(&mut self) {
        self.current_ema = None;
    }
}

/// Compute the SMA over `series`, forecasting an absent tail from the
/// preceding `window` SMA values
pub fn compute_sma(series: &Series, window: usize) -> Result<SmoothedSeries> {
    let known = series.known_values();
    // The forecast averages `window` smoothed values, the first of which
    // needs `window` observations of its own.
    let required = |window: usize| {
        if series.has_forecast_tail() {
            window.saturating_mul(2) - 1
        } else {
            window
        }
    };
    check_window("SMA", window, known.len(), required)?;

    let mut sma = SimpleMovingAverage::new(window)?;
    let mut smoothed = Vec::with_capacity(series.len());
    for &value in &known {
        sma.update(value);
        smoothed.push(sma.value());
    }

    if series.has_forecast_tail() {
        let end = known.len();
        let prior: Option<Vec<f64>> = smoothed[end - window..end].iter().copied().collect();
        smoothed.push(prior.map(|p| p.iter().sum::<f64>() / window as f64));
    }

    debug!(
        window,
        forecast = ?smoothed.last().copied().flatten(),
        "computed SMA"
    );

    Ok(SmoothedSeries::new(smoothed))
}

/// Compute the WMA over `series` with the [`default_weights`] for `window`
pub fn compute_wma(series: &Series, window: usize) -> Result<SmoothedSeries> {
    check_window("WMA", window, series.known_len(), |w| w)?;
    compute_wma_with_weights(series, window, &default_weights(window))
}

/// Compute the WMA over `series` with explicit weights, oldest first
///
/// `weights.len()` must equal `window`. An absent tail is forecast by the
/// weighted formula over the last `window` observed values.
pub fn compute_wma_with_weights(
    series: &Series,
    window: usize,
    weights: &[f64],
) -> Result<SmoothedSeries> {
    check_window("WMA", window, series.known_len(), |w| w)?;

    if weights.len() != window {
        return Err(SmoothingError::InvalidWeights(format!(
            "Expected {} weights for window {}, got {}",
            window,
            window,
            weights.len()
        )));
    }

    let mut wma = WeightedMovingAverage::new(weights.to_vec())?;
    let mut smoothed = Vec::with_capacity(series.len());
    for value in series.known_values() {
        wma.update(value);
        smoothed.push(wma.value());
    }

    if series.has_forecast_tail() {
        // The window already holds the last `window` observed values.
        smoothed.push(wma.value());
    }

    debug!(
        window,
        ?weights,
        forecast = ?smoothed.last().copied().flatten(),
        "computed WMA"
    );

    Ok(SmoothedSeries::new(smoothed))
}

/// Compute the EMA over `series`, seeded with the first value
///
/// An absent tail is forecast as one more update step with the last observed
/// value against its own EMA.
pub fn compute_ema(series: &Series, alpha: f64) -> Result<SmoothedSeries> {
    let mut ema = ExponentialMovingAverage::new(alpha)?;

    let known = series.known_values();
    let Some(&last) = known.last() else {
        return Err(SmoothingError::InsufficientHistory(
            "EMA needs at least one observed value to seed from".to_string(),
        ));
    };

    let mut smoothed = Vec::with_capacity(series.len());
    for &value in &known {
        ema.update(value);
        smoothed.push(ema.value());
    }

    if series.has_forecast_tail() {
        smoothed.push(Some(ema.project(last)));
    }

    debug!(
        alpha,
        forecast = ?smoothed.last().copied().flatten(),
        "computed EMA"
    );

    Ok(SmoothedSeries::new(smoothed))
}

/// Check that `alpha` lies strictly inside (0, 1)
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(SmoothingError::InvalidAlpha(format!(
            "Alpha must be strictly between 0 and 1, got {}",
            alpha
        )));
    }
    Ok(())
}

/// Check that `window` lies in `[MIN_WINDOW, MAX_WINDOW]`
pub fn validate_window(window: usize) -> Result<()> {
    if !(MIN_WINDOW..=MAX_WINDOW).contains(&window) {
        return Err(SmoothingError::InvalidWindow(format!(
            "Window must be between {} and {}, got {}",
            MIN_WINDOW, MAX_WINDOW, window
        )));
    }
    Ok(())
}

/// Check `window` against the range and the observed history
///
/// `required` maps a window to the number of observed values it needs. A
/// window above `MAX_WINDOW` that still fits inside the observed values is
/// reported as missing history when the series is too short for it; any
/// other out-of-range window is `InvalidWindow`.
fn check_window(
    method: &str,
    window: usize,
    known: usize,
    required: impl Fn(usize) -> usize,
) -> Result<()> {
    if window < MIN_WINDOW || (window > MAX_WINDOW && window > known) {
        return validate_window(window);
    }

    let required = required(window);
    if known < required {
        return Err(SmoothingError::InsufficientHistory(format!(
            "{} with window {} needs {} observed values, have {}",
            method, window, required, known
        )));
    }

    validate_window(window)
}
