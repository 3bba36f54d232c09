use clap::Parser;
use forecast_report::data::nepse_sample;
use forecast_report::{run_forecast, ForecastConfig, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Forecast the blank Jestha NEPSE index value with SMA, WMA and EMA
#[derive(Debug, Parser)]
#[command(name = "nepse-forecast", version, about)]
struct Args {
    /// Rolling window for SMA and WMA (2 to 6)
    #[arg(short, long)]
    window: Option<usize>,

    /// Smoothing factor for EMA, strictly between 0 and 1
    #[arg(short, long)]
    alpha: Option<f64>,

    /// TOML file with `window` and `alpha` keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<()> {
    let config = ForecastConfig::resolve(args.config.as_deref(), args.window, args.alpha)?;
    let series = nepse_sample()?;
    let report = run_forecast(&series, &config)?.report();

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "forecast failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
