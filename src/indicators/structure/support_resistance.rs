//! Support and Resistance levels detection

use crate::config::LevelParams;
use crate::indicators::error::{IndicatorError, Result};
use crate::models::signal::{Level, LevelSet};
use crate::models::PriceSeries;

/// Calculate support and resistance levels
///
/// Within the trailing `window` bars, a low that is the minimum of its
/// `±neighborhood` bars is a support candidate and a high that is the maximum
/// of its neighbourhood is a resistance candidate. Only bars with a complete
/// neighbourhood inside the window qualify. The most recent support below the
/// last close and the most recent resistance above it are returned; a side
/// with no candidate is left undetermined.
pub fn calculate_support_resistance(series: &PriceSeries, params: &LevelParams) -> Result<LevelSet> {
    if params.window == 0 {
        return Err(IndicatorError::invalid_parameter(
            "level window must be > 0",
        ));
    }
    let Some(last) = series.last() else {
        return Ok(LevelSet::default());
    };
    let current_price = last.close;

    let start = series.len().saturating_sub(params.window);
    let k = params.neighborhood;
    let (lows, highs, dates) = (series.lows(), series.highs(), series.dates());

    let mut levels = LevelSet::default();
    // Walk backwards so the first hit on each side is the most recent one.
    for i in candidate_indices(start, series.len(), k).rev() {
        let neighbours = i - k..=i + k;

        if levels.support.is_none()
            && lows[i] < current_price
            && neighbours.clone().all(|j| lows[i] <= lows[j])
        {
            levels.support = Some(level(lows[i], dates[i], current_price));
        }

        if levels.resistance.is_none()
            && highs[i] > current_price
            && neighbours.clone().all(|j| highs[i] >= highs[j])
        {
            levels.resistance = Some(level(highs[i], dates[i], current_price));
        }

        if levels.support.is_some() && levels.resistance.is_some() {
            break;
        }
    }

    Ok(levels)
}

/// Calculate support/resistance with default window (60) and neighbourhood (±3)
pub fn calculate_support_resistance_default(series: &PriceSeries) -> Result<LevelSet> {
    calculate_support_resistance(series, &LevelParams::default())
}

/// Indices in `[start, len)` whose `±k` neighbourhood stays inside that range.
fn candidate_indices(start: usize, len: usize, k: usize) -> std::ops::Range<usize> {
    let first = start + k;
    let end = len.saturating_sub(k);
    first..end.max(first)
}

fn level(price: f64, date: chrono::NaiveDate, current_price: f64) -> Level {
    Level {
        price,
        date,
        distance_pct: ((price - current_price) / current_price) * 100.0,
    }
}
