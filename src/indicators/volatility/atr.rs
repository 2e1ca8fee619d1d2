//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::require_period;
use crate::models::indicators::IndicatorSeries;
use crate::models::PriceSeries;

pub const DEFAULT_ATR_PERIOD: usize = 14;

/// Per-bar true range; the first bar has no previous close and uses high - low.
pub fn true_ranges(series: &PriceSeries) -> Vec<f64> {
    let (highs, lows, closes) = (series.highs(), series.lows(), series.closes());
    (0..series.len())
        .map(|i| match i {
            0 => highs[0] - lows[0],
            _ => math::true_range(highs[i], lows[i], closes[i - 1]),
        })
        .collect()
}

/// Calculate ATR (Average True Range)
///
/// Wilder's smoothing (α = 1/period) of the true range, seeded with the
/// simple average of the first `period` true ranges.
pub fn calculate_atr(series: &PriceSeries, period: usize) -> Result<IndicatorSeries> {
    require_period("ATR", period)?;
    Ok(math::wilder(&true_ranges(series), period).into())
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(series: &PriceSeries) -> Result<IndicatorSeries> {
    calculate_atr(series, DEFAULT_ATR_PERIOD)
}
