//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::error::{IndicatorError, Result};
use crate::models::indicators::{BollingerSeries, IndicatorSeries};
use crate::models::PriceSeries;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The standard deviation is the sample deviation of the trailing closes.
pub fn calculate_bollinger_bands(
    series: &PriceSeries,
    period: usize,
    std_dev: f64,
) -> Result<BollingerSeries> {
    if period < 2 {
        return Err(IndicatorError::invalid_parameter(
            "Bollinger period must be at least 2",
        ));
    }
    if !(std_dev.is_finite() && std_dev > 0.0) {
        return Err(IndicatorError::invalid_parameter(
            "Bollinger std_dev must be positive",
        ));
    }

    let closes = series.closes();
    let middle = math::rolling_mean(closes, period);
    let deviation = math::rolling_std(closes, period);

    let n = closes.len();
    let mut upper = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);
    let mut width = Vec::with_capacity(n);
    let mut percent_b = Vec::with_capacity(n);

    for i in 0..n {
        let (Some(mid), Some(dev)) = (middle[i], deviation[i]) else {
            upper.push(None);
            lower.push(None);
            width.push(None);
            percent_b.push(None);
            continue;
        };
        let up = mid + std_dev * dev;
        let low = mid - std_dev * dev;
        upper.push(Some(up));
        lower.push(Some(low));
        width.push(Some((up - low) / mid));
        percent_b.push((up > low).then(|| (closes[i] - low) / (up - low)));
    }

    Ok(BollingerSeries {
        upper: IndicatorSeries::new(upper),
        middle: IndicatorSeries::new(middle),
        lower: IndicatorSeries::new(lower),
        width: IndicatorSeries::new(width),
        percent_b: IndicatorSeries::new(percent_b),
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(series: &PriceSeries) -> Result<BollingerSeries> {
    calculate_bollinger_bands(series, 20, 2.0)
}
