//! Simple moving average and moving-average alignment

use std::collections::BTreeMap;

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::require_period;
use crate::models::indicators::IndicatorSeries;
use crate::models::signal::MaAlignment;
use crate::models::PriceSeries;

pub const DEFAULT_MA_PERIODS: [usize; 4] = [5, 10, 20, 60];

/// Arithmetic mean of the trailing `period` closes; undefined for the first `period - 1` bars.
pub fn calculate_ma(series: &PriceSeries, period: usize) -> Result<IndicatorSeries> {
    require_period("MA", period)?;
    Ok(math::rolling_mean(series.closes(), period).into())
}

/// Calculate multiple MAs at once, keyed by period
pub fn calculate_mas(
    series: &PriceSeries,
    periods: &[usize],
) -> Result<BTreeMap<usize, IndicatorSeries>> {
    periods
        .iter()
        .map(|&period| Ok((period, calculate_ma(series, period)?)))
        .collect()
}

/// Strictly ascending short > medium > long is a bullish stack, strictly
/// descending a bearish one, anything else is mixed.
pub fn classify_alignment(short: f64, medium: f64, long: f64) -> MaAlignment {
    if short > medium && medium > long {
        MaAlignment::BullishStack
    } else if short < medium && medium < long {
        MaAlignment::BearishStack
    } else {
        MaAlignment::Mixed
    }
}
