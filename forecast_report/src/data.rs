//! Bundled sample series

use crate::error::Result;
use smoothing_math::Series;

/// Month labels of the NEPSE sample, Ashwin through Jestha
pub const NEPSE_MONTHS: [&str; 12] = [
    "Ashwin", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush", "Magh", "Falgun",
    "Chaitra", "Baishak", "Jestha",
];

/// Monthly NEPSE index closes; Jestha is the period to forecast
pub const NEPSE_INDEX: [Option<f64>; 12] = [
    Some(2214.0),
    Some(2259.0),
    Some(3019.0),
    Some(2529.0),
    Some(2756.0),
    Some(2762.0),
    Some(2662.0),
    Some(2597.0),
    Some(2691.0),
    Some(2720.0),
    Some(2665.0),
    None,
];

/// The NEPSE index sample with its blank Jestha period
pub fn nepse_sample() -> Result<Series> {
    Ok(Series::from_values(NEPSE_MONTHS, NEPSE_INDEX)?)
}
