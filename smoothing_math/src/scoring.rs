//! Error scoring of smoothed values against observations

use crate::series::{Series, SmoothedSeries};
use crate::{Result, SmoothingError};
use serde::Serialize;
use tracing::debug;

/// Error at one position of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScoredPoint {
    /// Actual and smoothed values were both available
    Scored { error: f64, squared_error: f64 },
    /// No actual value, or no smoothed value, at this position
    Excluded,
}

impl ScoredPoint {
    pub fn error(&self) -> Option<f64> {
        match self {
            ScoredPoint::Scored { error, .. } => Some(*error),
            ScoredPoint::Excluded => None,
        }
    }

    pub fn squared_error(&self) -> Option<f64> {
        match self {
            ScoredPoint::Scored { squared_error, .. } => Some(*squared_error),
            ScoredPoint::Excluded => None,
        }
    }
}

/// Per-position errors aligned with a [`Series`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorSeries(Vec<ScoredPoint>);

impl ErrorSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScoredPoint> {
        self.0.get(index)
    }

    pub fn points(&self) -> &[ScoredPoint] {
        &self.0
    }

    /// Number of positions that count towards the MSE
    pub fn scored_count(&self) -> usize {
        self.scored_errors().count()
    }

    fn scored_errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().filter_map(ScoredPoint::error)
    }
}

/// Errors of one smoothed sequence and their mean squared error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    pub errors: ErrorSeries,
    pub mse: f64,
}

impl Score {
    /// Root mean squared error
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }

    /// Mean absolute error over the same positions as the MSE
    pub fn mae(&self) -> f64 {
        let n = self.errors.scored_count() as f64;
        self.errors.scored_errors().map(f64::abs).sum::<f64>() / n
    }
}

/// Score `smoothed` against the observed values of `series`
///
/// `error = actual - smoothed` wherever both exist; every other position,
/// including the forecast tail, is excluded from the MSE.
pub fn score(series: &Series, smoothed: &SmoothedSeries) -> Result<Score> {
    if series.len() != smoothed.len() {
        return Err(SmoothingError::MalformedSeries(format!(
            "Smoothed length ({}) doesn't match series length ({})",
            smoothed.len(),
            series.len()
        )));
    }

    let points: Vec<ScoredPoint> = series
        .values()
        .iter()
        .zip(smoothed.values())
        .map(|(actual, fitted)| match (actual, fitted) {
            (Some(a), Some(f)) => {
                let error = a - f;
                ScoredPoint::Scored {
                    error,
                    squared_error: error.powi(2),
                }
            }
            _ => ScoredPoint::Excluded,
        })
        .collect();

    let squared: Vec<f64> = points.iter().filter_map(ScoredPoint::squared_error).collect();
    if squared.is_empty() {
        return Err(SmoothingError::NoScorablePoints(
            "No position has both an observed and a smoothed value".to_string(),
        ));
    }

    let mse = squared.iter().sum::<f64>() / squared.len() as f64;
    debug!(scored = squared.len(), mse, "scored smoothed series");

    Ok(Score {
        errors: ErrorSeries(points),
        mse,
    })
}
