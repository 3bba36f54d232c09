//! Series container for labelled observations
//!
//! A [`Series`] is an ordered run of labelled periods. Every period carries an
//! observed value except, optionally, the final one: that absent tail is the
//! period the smoothing methods forecast.

use crate::{Result, SmoothingError};
use serde::{Deserialize, Serialize};

/// A single labelled period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Period label, e.g. a month name
    pub label: String,
    /// Observed value, `None` for the forecast tail
    pub value: Option<f64>,
}

impl Observation {
    /// Create an observed period
    pub fn known(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }

    /// Create the period whose value is to be forecast
    pub fn missing(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }
}

/// Ordered, validated sequence of observations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<Option<f64>>,
}

impl Series {
    /// Create a series, rejecting empty input, non-finite values and
    /// absent values anywhere but the final position
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(SmoothingError::MalformedSeries(
                "Series must contain at least one observation".to_string(),
            ));
        }

        let last = observations.len() - 1;
        for (i, obs) in observations.iter().enumerate() {
            match obs.value {
                None if i != last => {
                    return Err(SmoothingError::MalformedSeries(format!(
                        "Absent value at position {} ({}); only the final period may be absent",
                        i, obs.label
                    )));
                }
                Some(v) if !v.is_finite() => {
                    return Err(SmoothingError::MalformedSeries(format!(
                        "Non-finite value {} at position {} ({})",
                        v, i, obs.label
                    )));
                }
                _ => {}
            }
        }

        let (labels, values) = observations
            .into_iter()
            .map(|obs| (obs.label, obs.value))
            .unzip();

        Ok(Self { labels, values })
    }

    /// Create a series from parallel label and value sequences
    pub fn from_values<L, S, V>(labels: L, values: V) -> Result<Self>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
        V: IntoIterator<Item = Option<f64>>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let values: Vec<Option<f64>> = values.into_iter().collect();

        if labels.len() != values.len() {
            return Err(SmoothingError::MalformedSeries(format!(
                "Got {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }

        Self::new(
            labels
                .into_iter()
                .zip(values)
                .map(|(label, value)| Observation { label, value })
                .collect(),
        )
    }

    /// Number of periods, including the forecast tail
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Value at `index`, `None` when out of range or absent
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Whether the final period is the absent forecast target
    pub fn has_forecast_tail(&self) -> bool {
        matches!(self.values.last(), Some(None))
    }

    /// Label of the forecast tail, if there is one
    pub fn forecast_label(&self) -> Option<&str> {
        if self.has_forecast_tail() {
            self.labels.last().map(String::as_str)
        } else {
            None
        }
    }

    /// Number of observed periods
    pub fn known_len(&self) -> usize {
        if self.has_forecast_tail() {
            self.len() - 1
        } else {
            self.len()
        }
    }

    /// The observed prefix of the series
    pub fn known_values(&self) -> Vec<f64> {
        self.values.iter().map_while(|v| *v).collect()
    }

    /// Iterate over `(label, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Smoothed values aligned index-for-index with a [`Series`]
///
/// `None` marks positions without enough history for the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SmoothedSeries(Vec<Option<f64>>);

impl SmoothedSeries {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.0
    }

    /// The final smoothed value
    ///
    /// For a series with a forecast tail this is the forecast.
    pub fn forecast(&self) -> Option<f64> {
        self.0.last().copied().flatten()
    }
}
