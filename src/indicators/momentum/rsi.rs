//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::require_period;
use crate::models::indicators::IndicatorSeries;
use crate::models::PriceSeries;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are Wilder-smoothed (α = 1/period) after a simple-average
/// seed over the first `period` changes, so the first defined value is at
/// bar `period`. A zero average loss yields 100.
pub fn calculate_rsi(series: &PriceSeries, period: usize) -> Result<IndicatorSeries> {
    require_period("RSI", period)?;

    let closes = series.closes();
    let n = closes.len();
    if n < 2 {
        return Ok(IndicatorSeries::undefined(n));
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let avg_gains = math::wilder(&gains, period);
    let avg_losses = math::wilder(&losses, period);

    let values = std::iter::once(None)
        .chain(avg_gains.into_iter().zip(avg_losses).map(|pair| match pair {
            (Some(gain), Some(loss)) => Some(rsi_from_averages(gain, loss)),
            _ => None,
        }))
        .collect();

    Ok(values)
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(series: &PriceSeries) -> Result<IndicatorSeries> {
    calculate_rsi(series, DEFAULT_RSI_PERIOD)
}

pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
