use forecast_report::ForecastError;
use smoothing_math::SmoothingError;
use std::io;

#[test]
fn test_error_conversion() {
    let smoothing = SmoothingError::NoScorablePoints("window covers the series".to_string());
    let forecast_error = ForecastError::from(smoothing.clone());

    match forecast_error {
        ForecastError::Smoothing(inner) => assert_eq!(inner, smoothing),
        _ => panic!("Expected Smoothing variant"),
    }

    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    assert!(matches!(ForecastError::from(io_error), ForecastError::Io(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::from(SmoothingError::InvalidAlpha(
        "Alpha must be strictly between 0 and 1, got 1.5".to_string(),
    ));
    let error_string = error.to_string();

    assert!(error_string.starts_with("Smoothing error"));
    assert!(error_string.contains("Invalid alpha"));
    assert!(error_string.contains("got 1.5"));

    let error = ForecastError::from(SmoothingError::InvalidWindow(
        "Window must be between 2 and 6, got 9".to_string(),
    ));
    assert_eq!(
        error.to_string(),
        "Smoothing error: Invalid window: Window must be between 2 and 6, got 9"
    );
}
