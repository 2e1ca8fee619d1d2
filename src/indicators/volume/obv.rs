//! OBV (On-Balance Volume) indicator

use crate::models::indicators::IndicatorSeries;
use crate::models::PriceSeries;

/// Cumulative volume flow starting at 0 on the first bar.
///
/// Each step adds `+volume` on a higher close, `-volume` on a lower close and
/// nothing when the close is unchanged. Defined at every bar.
pub fn calculate_obv(series: &PriceSeries) -> IndicatorSeries {
    let closes = series.closes();
    let volumes = series.volumes();
    if closes.is_empty() {
        return IndicatorSeries::default();
    }

    let mut obv = 0.0;
    std::iter::once(Some(obv))
        .chain((1..closes.len()).map(|i| {
            obv += obv_step(closes[i - 1], closes[i], volumes[i]);
            Some(obv)
        }))
        .collect()
}

/// Signed volume contribution of one bar.
pub fn obv_step(prev_close: f64, close: f64, volume: f64) -> f64 {
    if close > prev_close {
        volume
    } else if close < prev_close {
        -volume
    } else {
        0.0
    }
}
