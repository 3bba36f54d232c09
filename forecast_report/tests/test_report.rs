use approx::assert_relative_eq;
use forecast_report::data::nepse_sample;
use forecast_report::{run_forecast, ForecastConfig, ForecastReport};
use pretty_assertions::assert_eq;
use smoothing_math::Method;

fn default_report() -> ForecastReport {
    run_forecast(&nepse_sample().unwrap(), &ForecastConfig::default())
        .unwrap()
        .report()
}

#[test]
fn test_report_summary() {
    let report = default_report();

    assert_eq!(report.best, Method::Wma);
    assert_eq!(report.forecast_label.as_deref(), Some("Jestha"));

    let methods: Vec<_> = report.summary.iter().map(|s| s.method).collect();
    assert_eq!(methods, vec![Method::Sma, Method::Wma, Method::Ema]);

    let wma = report.summary_for(Method::Wma).unwrap();
    assert_relative_eq!(wma.rmse, wma.mse.sqrt());
    assert_eq!(wma.scored_points, 8);

    // EMA starts on the first actual, so its first error is zero
    let ema = report.summary_for(Method::Ema).unwrap();
    let ema_errors: f64 = report
        .table
        .rows
        .iter()
        .filter_map(|row| row.cell(Method::Ema).and_then(|c| c.error))
        .map(f64::abs)
        .sum();
    assert_relative_eq!(ema.mae, ema_errors / 11.0, epsilon = 1e-9);
    assert!(ema.mae > 0.0 && ema.mae <= ema.rmse);
}

#[test]
fn test_table_rows() {
    let table = default_report().table;

    assert_eq!(table.rows.len(), 12);
    assert_eq!(table.methods, Method::ALL.to_vec());

    let first = &table.rows[0];
    assert_eq!(first.label, "Ashwin");
    assert_eq!(first.actual, Some(2214.0));
    assert_eq!(first.cell(Method::Sma).unwrap().smoothed, None);
    assert_eq!(first.cell(Method::Ema).unwrap().smoothed, Some(2214.0));
    assert_eq!(first.cell(Method::Ema).unwrap().error, Some(0.0));

    let sma_april = table.rows[3].cell(Method::Sma).unwrap();
    assert_relative_eq!(sma_april.smoothed.unwrap(), 2505.25);
    assert_relative_eq!(sma_april.error.unwrap(), 2529.0 - 2505.25);
    assert_relative_eq!(sma_april.squared_error.unwrap(), 23.75 * 23.75);

    let tail = table.rows.last().unwrap();
    assert_eq!(tail.label, "Jestha");
    assert_eq!(tail.actual, None);
    for cell in &tail.cells {
        assert!(cell.smoothed.is_some());
        assert_eq!(cell.error, None);
        assert_eq!(cell.squared_error, None);
    }
}

#[test]
fn test_text_rendering() {
    let text = default_report().to_string();

    assert!(text.contains("MSE Summary (window=4, alpha=0.50)"));
    assert!(text.contains("SMA (Simple Moving Average): MSE 3311.60, RMSE 57.55, MAE"));
    assert!(text.contains("Best Method Based on MSE: WMA (Weighted Moving Average)"));
    assert!(text.contains("Forecasts for Jestha:"));
    assert!(text.contains("WMA: 2678.60"));
    assert!(text.contains("Jestha"));

    // header plus one line per period
    let table_lines = text
        .lines()
        .skip_while(|l| !l.starts_with("Period"))
        .count();
    assert_eq!(table_lines, 13);
}

#[test]
fn test_json_export() {
    let report = default_report();
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["best"], "WMA");
    assert_eq!(value["forecast_label"], "Jestha");
    assert_eq!(value["config"]["window"], 4);
    assert_eq!(value["summary"][0]["method"], "SMA");
    assert_eq!(value["table"]["rows"].as_array().unwrap().len(), 12);
    assert!(value["table"]["rows"][11]["actual"].is_null());
}
