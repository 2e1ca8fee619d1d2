//! EMA (Exponential Moving Average) indicator

use std::collections::BTreeMap;

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::require_period;
use crate::models::indicators::IndicatorSeries;
use crate::models::PriceSeries;

pub const DEFAULT_EMA_PERIODS: [usize; 3] = [5, 12, 26];

/// Calculate EMA for a specific period
///
/// EMA[t] = close[t] * α + EMA[t-1] * (1 - α), α = 2 / (period + 1),
/// seeded with the simple average of the first `period` closes.
pub fn calculate_ema(series: &PriceSeries, period: usize) -> Result<IndicatorSeries> {
    require_period("EMA", period)?;
    Ok(math::ema(series.closes(), period).into())
}

/// Calculate multiple EMAs at once
pub fn calculate_emas(
    series: &PriceSeries,
    periods: &[usize],
) -> Result<BTreeMap<usize, IndicatorSeries>> {
    periods
        .iter()
        .map(|&period| Ok((period, calculate_ema(series, period)?)))
        .collect()
}
