//! Volume moving averages

use std::collections::BTreeMap;

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::require_period;
use crate::models::indicators::IndicatorSeries;
use crate::models::PriceSeries;

pub const DEFAULT_VOLUME_MA_PERIODS: [usize; 3] = [5, 10, 20];

/// Simple average of the trailing `period` volumes.
pub fn calculate_volume_ma(series: &PriceSeries, period: usize) -> Result<IndicatorSeries> {
    require_period("Volume MA", period)?;
    Ok(math::rolling_mean(series.volumes(), period).into())
}

pub fn calculate_volume_mas(
    series: &PriceSeries,
    periods: &[usize],
) -> Result<BTreeMap<usize, IndicatorSeries>> {
    periods
        .iter()
        .map(|&period| Ok((period, calculate_volume_ma(series, period)?)))
        .collect()
}
