//! Run configuration for a forecast

use crate::error::Result;
use serde::{Deserialize, Serialize};
use smoothing_math::moving_averages::{validate_alpha, validate_window};
use std::fs;
use std::path::Path;

pub use smoothing_math::moving_averages::{MAX_WINDOW, MIN_WINDOW};

/// Default rolling window
pub const DEFAULT_WINDOW: usize = 4;

/// Default EMA smoothing factor
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Lower bound offered to users picking alpha
pub const MIN_ALPHA: f64 = 0.1;

/// Upper bound offered to users picking alpha
pub const MAX_ALPHA: f64 = 0.9;

/// Step between alpha choices offered to users
pub const ALPHA_STEP: f64 = 0.05;

/// Parameters shared by the three smoothing methods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Rolling window for SMA and WMA
    pub window: usize,
    /// Smoothing factor for EMA
    pub alpha: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl ForecastConfig {
    /// Create a validated configuration
    pub fn new(window: usize, alpha: f64) -> Result<Self> {
        let config = Self { window, alpha };
        config.validate()?;
        Ok(config)
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check the window and alpha ranges
    ///
    /// Reports the same `InvalidWindow` and `InvalidAlpha` errors as the
    /// smoothing functions.
    pub fn validate(&self) -> Result<()> {
        validate_window(self.window)?;
        validate_alpha(self.alpha)?;
        Ok(())
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = Self::parse_toml(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::resolve(Some(path.as_ref()), None, None)
    }

    /// Layer explicit values over an optional TOML file over the defaults,
    /// validating only the final result
    pub fn resolve(
        path: Option<&Path>,
        window: Option<usize>,
        alpha: Option<f64>,
    ) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::parse_toml(&fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        if let Some(window) = window {
            config.window = window;
        }
        if let Some(alpha) = alpha {
            config.alpha = alpha;
        }
        config.validate()?;
        Ok(config)
    }

    fn parse_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
