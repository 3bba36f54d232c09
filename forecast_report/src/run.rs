//! A single forecast run over all three smoothing methods

use crate::config::ForecastConfig;
use crate::error::Result;
use crate::report::{ForecastReport, ForecastTable};
use smoothing_math::{select_best, Method, MethodResult, Series, SmoothingError};
use tracing::info;

/// Results of SMA, WMA and EMA over one series with one configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRun {
    config: ForecastConfig,
    series: Series,
    results: Vec<MethodResult>,
    best: Method,
}

/// Smooth, score and rank every method over `series`
///
/// The configuration goes to the smoothing functions unchecked, so their
/// error kinds reach the caller. The first failing method aborts the run;
/// no partial run is returned.
pub fn run_forecast(series: &Series, config: &ForecastConfig) -> Result<ForecastRun> {
    let results = Method::ALL
        .iter()
        .map(|&method| MethodResult::evaluate(method, series, config.window, config.alpha))
        .collect::<smoothing_math::Result<Vec<_>>>()?;

    let best = select_best(&results).ok_or_else(|| {
        SmoothingError::NoScorablePoints("No method produced a score".to_string())
    })?;

    info!(
        window = config.window,
        alpha = config.alpha,
        %best,
        "forecast run complete"
    );

    Ok(ForecastRun {
        config: *config,
        series: series.clone(),
        results,
        best,
    })
}

impl ForecastRun {
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Method results in priority order
    pub fn results(&self) -> &[MethodResult] {
        &self.results
    }

    pub fn result(&self, method: Method) -> Option<&MethodResult> {
        self.results.iter().find(|r| r.method == method)
    }

    /// The method with the lowest MSE
    pub fn best(&self) -> Method {
        self.best
    }

    pub fn best_result(&self) -> Option<&MethodResult> {
        self.result(self.best)
    }

    /// The best method's value for the forecast tail
    pub fn best_forecast(&self) -> Option<f64> {
        if !self.series.has_forecast_tail() {
            return None;
        }
        self.best_result().and_then(MethodResult::forecast)
    }

    /// Each method's value for the forecast tail
    pub fn forecasts(&self) -> Vec<(Method, Option<f64>)> {
        let has_tail = self.series.has_forecast_tail();
        self.results
            .iter()
            .map(|r| (r.method, r.forecast().filter(|_| has_tail)))
            .collect()
    }

    /// Per-period table of actuals, smoothed values and errors
    pub fn table(&self) -> ForecastTable {
        ForecastTable::from_run(self)
    }

    pub fn report(&self) -> ForecastReport {
        ForecastReport::from_run(self)
    }
}
