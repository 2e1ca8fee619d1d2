//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::error::{IndicatorError, Result};
use crate::indicators::require_period;
use crate::models::indicators::{IndicatorSeries, MacdSeries};
use crate::models::PriceSeries;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// All three lines are masked until the signal line is seeded, i.e. the
/// first `slow + signal - 2` bars are undefined.
pub fn calculate_macd(
    series: &PriceSeries,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdSeries> {
    require_period("MACD fast", fast_period)?;
    require_period("MACD slow", slow_period)?;
    require_period("MACD signal", signal_period)?;
    if fast_period >= slow_period {
        return Err(IndicatorError::invalid_parameter(
            "MACD fast period must be < slow period",
        ));
    }

    let closes = series.closes();
    let fast = math::ema(closes, fast_period);
    let slow = math::ema(closes, slow_period);

    let raw_macd: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let signal = math::ema_of_defined(&raw_macd, signal_period);

    let mut macd_line = Vec::with_capacity(closes.len());
    let mut histogram = Vec::with_capacity(closes.len());
    for (m, s) in raw_macd.iter().zip(&signal) {
        match (m, s) {
            (Some(m), Some(s)) => {
                macd_line.push(Some(*m));
                histogram.push(Some(m - s));
            }
            _ => {
                macd_line.push(None);
                histogram.push(None);
            }
        }
    }

    Ok(MacdSeries {
        macd: IndicatorSeries::new(macd_line),
        signal: IndicatorSeries::new(signal),
        histogram: IndicatorSeries::new(histogram),
        period: (fast_period, slow_period, signal_period),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(series: &PriceSeries) -> Result<MacdSeries> {
    calculate_macd(series, 12, 26, 9)
}
