//! Tabular and JSON reporting of a forecast run

use crate::config::ForecastConfig;
use crate::error::Result;
use crate::run::ForecastRun;
use serde::Serialize;
use smoothing_math::{Method, ScoredPoint};
use std::fmt;

const LABEL_WIDTH: usize = 10;
const CELL_WIDTH: usize = 12;

/// One method's columns in a table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCell {
    pub method: Method,
    pub smoothed: Option<f64>,
    pub error: Option<f64>,
    pub squared_error: Option<f64>,
}

/// One period of the forecast table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub actual: Option<f64>,
    pub cells: Vec<MethodCell>,
}

impl TableRow {
    pub fn cell(&self, method: Method) -> Option<&MethodCell> {
        self.cells.iter().find(|c| c.method == method)
    }
}

/// Actuals, smoothed values and errors for every period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastTable {
    pub methods: Vec<Method>,
    pub rows: Vec<TableRow>,
}

impl ForecastTable {
    pub(crate) fn from_run(run: &ForecastRun) -> Self {
        let methods: Vec<Method> = run.results().iter().map(|r| r.method).collect();

        let rows = run
            .series()
            .iter()
            .enumerate()
            .map(|(i, (label, actual))| TableRow {
                label: label.to_string(),
                actual,
                cells: run
                    .results()
                    .iter()
                    .map(|r| {
                        let point = r.errors().get(i).copied().unwrap_or(ScoredPoint::Excluded);
                        MethodCell {
                            method: r.method,
                            smoothed: r.smoothed.get(i),
                            error: point.error(),
                            squared_error: point.squared_error(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { methods, rows }
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

impl fmt::Display for ForecastTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<lw$}{:>cw$}", "Period", "Actual", lw = LABEL_WIDTH, cw = CELL_WIDTH)?;
        for method in &self.methods {
            write!(
                f,
                "{:>cw$}{:>cw$}{:>cw$}",
                method.name(),
                format!("{} Err", method.name()),
                format!("{} SqErr", method.name()),
                cw = CELL_WIDTH
            )?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(
                f,
                "{:<lw$}{:>cw$}",
                row.label,
                cell(row.actual),
                lw = LABEL_WIDTH,
                cw = CELL_WIDTH
            )?;
            for c in &row.cells {
                write!(
                    f,
                    "{:>cw$}{:>cw$}{:>cw$}",
                    cell(c.smoothed),
                    cell(c.error),
                    cell(c.squared_error),
                    cw = CELL_WIDTH
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error summary and tail forecast of one method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSummary {
    pub method: Method,
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub scored_points: usize,
    pub forecast: Option<f64>,
}

/// Everything a caller needs to present a forecast run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub config: ForecastConfig,
    pub forecast_label: Option<String>,
    pub summary: Vec<MethodSummary>,
    pub best: Method,
    pub table: ForecastTable,
}

impl ForecastReport {
    pub(crate) fn from_run(run: &ForecastRun) -> Self {
        let forecasts = run.forecasts();
        let summary = run
            .results()
            .iter()
            .zip(forecasts)
            .map(|(r, (_, forecast))| MethodSummary {
                method: r.method,
                mse: r.score.mse,
                rmse: r.score.rmse(),
                mae: r.score.mae(),
                scored_points: r.errors().scored_count(),
                forecast,
            })
            .collect();

        Self {
            config: *run.config(),
            forecast_label: run.series().forecast_label().map(str::to_string),
            summary,
            best: run.best(),
            table: run.table(),
        }
    }

    pub fn summary_for(&self, method: Method) -> Option<&MethodSummary> {
        self.summary.iter().find(|s| s.method == method)
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "MSE Summary (window={}, alpha={:.2}):",
            self.config.window, self.config.alpha
        )?;
        for s in &self.summary {
            writeln!(
                f,
                "  {} ({}): MSE {:.2}, RMSE {:.2}, MAE {:.2} over {} periods",
                s.method.name(),
                s.method.long_name(),
                s.mse,
                s.rmse,
                s.mae,
                s.scored_points
            )?;
        }
        writeln!(
            f,
            "Best Method Based on MSE: {} ({})",
            self.best.name(),
            self.best.long_name()
        )?;

        if let Some(label) = &self.forecast_label {
            writeln!(f, "Forecasts for {}:", label)?;
            for s in &self.summary {
                writeln!(f, "  {}: {}", s.method.name(), cell(s.forecast))?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.table)
    }
}
