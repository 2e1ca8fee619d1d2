//! KDJ stochastic oscillator

use crate::common::math;
use crate::config::{KdjParams, KdjSeed};
use crate::indicators::error::Result;
use crate::indicators::require_period;
use crate::models::indicators::{IndicatorSeries, KdjSeries};
use crate::models::PriceSeries;

/// RSV reported when the window's high equals its low.
pub const FLAT_RSV: f64 = 50.0;

/// Calculate KDJ
///
/// RSV = 100 * (close - lowest low) / (highest high - lowest low) over `period` bars
/// K = running average of RSV with weight 1/k_smoothing
/// D = running average of K with weight 1/d_smoothing
/// J = 3K - 2D
pub fn calculate_kdj(series: &PriceSeries, params: &KdjParams) -> Result<KdjSeries> {
    require_period("KDJ", params.period)?;
    require_period("KDJ K smoothing", params.k_smoothing)?;
    require_period("KDJ D smoothing", params.d_smoothing)?;

    let lows = math::rolling_min(series.lows(), params.period);
    let highs = math::rolling_max(series.highs(), params.period);

    let rsv: Vec<Option<f64>> = series
        .closes()
        .iter()
        .zip(lows.iter().zip(&highs))
        .map(|(&close, (low, high))| {
            let (low, high) = ((*low)?, (*high)?);
            if high == low {
                Some(FLAT_RSV)
            } else {
                Some(100.0 * (close - low) / (high - low))
            }
        })
        .collect();

    let k = smooth(&rsv, params.k_smoothing, params.seed);
    let d = smooth(&k, params.d_smoothing, params.seed);
    let j = k
        .iter()
        .zip(&d)
        .map(|(k, d)| Some(3.0 * (*k)? - 2.0 * (*d)?))
        .collect();

    Ok(KdjSeries {
        rsv: IndicatorSeries::new(rsv),
        k: IndicatorSeries::new(k),
        d: IndicatorSeries::new(d),
        j,
    })
}

/// Calculate KDJ with (9, 3, 3) and a seed of 50
pub fn calculate_kdj_default(series: &PriceSeries) -> Result<KdjSeries> {
    calculate_kdj(series, &KdjParams::default())
}

/// `out[t] = out[t-1] * (1 - 1/m) + input[t] / m`, starting from `seed`
/// at the first defined input.
fn smooth(input: &[Option<f64>], smoothing: usize, seed: KdjSeed) -> Vec<Option<f64>> {
    let alpha = 1.0 / smoothing as f64;
    let mut prev: Option<f64> = None;
    input
        .iter()
        .map(|value| {
            let value = (*value)?;
            let next = match (prev, seed) {
                (Some(p), _) => math::ema_from_previous(value, p, alpha),
                (None, KdjSeed::Fixed(start)) => math::ema_from_previous(value, start, alpha),
                (None, KdjSeed::FirstValue) => value,
            };
            prev = Some(next);
            Some(next)
        })
        .collect()
}
