use approx::assert_relative_eq;
use forecast_report::data::nepse_sample;
use forecast_report::{run_forecast, ForecastConfig, ForecastError};
use rstest::rstest;
use smoothing_math::{Method, Series, SmoothingError};

fn default_run() -> forecast_report::ForecastRun {
    run_forecast(&nepse_sample().unwrap(), &ForecastConfig::default()).unwrap()
}

#[test]
fn test_nepse_default_run() {
    let run = default_run();

    let sma = run.result(Method::Sma).unwrap();
    let wma = run.result(Method::Wma).unwrap();
    let ema = run.result(Method::Ema).unwrap();

    assert_relative_eq!(sma.mse(), 3311.6015625, epsilon = 1e-6);
    assert_relative_eq!(wma.mse(), 1758.7588888888889, epsilon = 1e-6);
    assert_relative_eq!(ema.mse(), 15493.110692544416, epsilon = 1e-6);

    assert_eq!(run.best(), Method::Wma);
    assert_relative_eq!(run.best_forecast().unwrap(), 2678.6, epsilon = 1e-9);
}

#[test]
fn test_tail_forecasts() {
    let run = default_run();
    let forecasts = run.forecasts();

    assert_eq!(forecasts.len(), 3);
    assert_eq!(forecasts[0].0, Method::Sma);
    assert_relative_eq!(forecasts[0].1.unwrap(), 2677.0, epsilon = 1e-9);
    assert_relative_eq!(forecasts[1].1.unwrap(), 2678.6, epsilon = 1e-9);
    assert_relative_eq!(forecasts[2].1.unwrap(), 2672.10302734375, epsilon = 1e-9);
}

#[test]
fn test_scoring_excludes_only_undefined_and_tail() {
    let run = default_run();

    // window 4 leaves 3 leading gaps for SMA and WMA
    assert_eq!(run.result(Method::Sma).unwrap().errors().scored_count(), 8);
    assert_eq!(run.result(Method::Wma).unwrap().errors().scored_count(), 8);
    // EMA is defined everywhere, so only the tail is excluded
    assert_eq!(run.result(Method::Ema).unwrap().errors().scored_count(), 11);
}

#[test]
fn test_high_alpha_favours_ema() {
    let config = ForecastConfig::new(4, 0.9).unwrap();
    let run = run_forecast(&nepse_sample().unwrap(), &config).unwrap();

    assert_relative_eq!(
        run.result(Method::Ema).unwrap().mse(),
        744.7349988325154,
        epsilon = 1e-6
    );
    assert_eq!(run.best(), Method::Ema);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn test_every_supported_window_runs(#[case] window: usize) {
    let config = ForecastConfig::default().with_window(window);
    let run = run_forecast(&nepse_sample().unwrap(), &config).unwrap();

    for result in run.results() {
        assert_eq!(result.smoothed.len(), 12);
        assert!(result.mse() >= 0.0);
        assert!(result.forecast().is_some());
    }
    assert_eq!(run.best(), Method::Wma);
}

#[test]
fn test_rerun_is_identical() {
    let series = nepse_sample().unwrap();
    let config = ForecastConfig::new(5, 0.35).unwrap();

    let first = run_forecast(&series, &config).unwrap();
    let second = run_forecast(&series, &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.report(), second.report());
}

#[test]
fn test_short_series_reports_missing_history() {
    let series = Series::from_values(
        ["a", "b", "c", "d", "e"],
        [Some(1.0), Some(2.0), Some(3.0), Some(4.0), None],
    )
    .unwrap();

    let err = run_forecast(&series, &ForecastConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::Smoothing(SmoothingError::InsufficientHistory(_))
    ));
}

#[test]
fn test_seven_wide_window_reports_missing_history() {
    // 11 observed values; the SMA forecast with window 7 needs 13
    let config = ForecastConfig::default().with_window(7);
    let err = run_forecast(&nepse_sample().unwrap(), &config).unwrap_err();

    assert!(matches!(
        err,
        ForecastError::Smoothing(SmoothingError::InsufficientHistory(_))
    ));
}

#[rstest]
#[case(1, 0.5)]
#[case(usize::MAX, 0.5)]
fn test_out_of_range_window_reports_invalid_window(#[case] window: usize, #[case] alpha: f64) {
    let config = ForecastConfig::default().with_window(window).with_alpha(alpha);
    let err = run_forecast(&nepse_sample().unwrap(), &config).unwrap_err();

    assert!(matches!(
        err,
        ForecastError::Smoothing(SmoothingError::InvalidWindow(_))
    ));
}

#[test]
fn test_out_of_range_alpha_reports_invalid_alpha() {
    let config = ForecastConfig::default().with_alpha(0.0);
    let err = run_forecast(&nepse_sample().unwrap(), &config).unwrap_err();

    assert!(matches!(
        err,
        ForecastError::Smoothing(SmoothingError::InvalidAlpha(_))
    ));
}

#[test]
fn test_fully_observed_series_has_no_forecasts() {
    let values: Vec<Option<f64>> = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0]
        .into_iter()
        .map(Some)
        .collect();
    let labels: Vec<String> = (1..=values.len()).map(|i| format!("W{}", i)).collect();
    let series = Series::from_values(labels, values).unwrap();

    let run = run_forecast(&series, &ForecastConfig::default()).unwrap();

    assert_eq!(run.best_forecast(), None);
    assert!(run.forecasts().iter().all(|(_, f)| f.is_none()));
    assert_eq!(run.report().forecast_label, None);
}
