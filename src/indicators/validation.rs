//! Series validation run before any indicator is computed.

use std::ops::Deref;

use tracing::debug;

use crate::indicators::error::{BarDefect, IndicatorError, Result};
use crate::models::bar::{PriceBar, PriceSeries};

/// Default minimum history, matching the longest moving-average window.
pub const DEFAULT_MIN_BARS: usize = 60;

/// A series that passed [`validate_series`]. Borrows the caller's data.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedSeries<'a> {
    series: &'a PriceSeries,
}

impl<'a> ValidatedSeries<'a> {
    pub fn series(&self) -> &'a PriceSeries {
        self.series
    }
}

impl Deref for ValidatedSeries<'_> {
    type Target = PriceSeries;

    fn deref(&self) -> &PriceSeries {
        self.series
    }
}

/// Checks length, then every bar in order; the first violation is returned.
///
/// # Errors
/// - [`IndicatorError::InsufficientData`] when the series has fewer than `min_bars` bars.
/// - [`IndicatorError::MalformedBar`] when a bar breaks the OHLC invariant, has a
///   non-positive price, or its date does not strictly follow the previous bar.
pub fn validate_series(series: &PriceSeries, min_bars: usize) -> Result<ValidatedSeries<'_>> {
    if series.len() < min_bars {
        return Err(IndicatorError::insufficient_data(min_bars, series.len()));
    }

    let mut previous: Option<PriceBar> = None;
    for (index, bar) in series.bars().enumerate() {
        let defect = check_bar(&bar).or_else(|| {
            previous
                .filter(|prev| bar.date <= prev.date)
                .map(|_| BarDefect::DateNotAscending)
        });
        if let Some(reason) = defect {
            return Err(IndicatorError::MalformedBar {
                index,
                date: bar.date,
                reason,
            });
        }
        previous = Some(bar);
    }

    debug!(bars = series.len(), min_bars, "Series validated");
    Ok(ValidatedSeries { series })
}

/// Validates with [`DEFAULT_MIN_BARS`].
pub fn validate_series_default(series: &PriceSeries) -> Result<ValidatedSeries<'_>> {
    validate_series(series, DEFAULT_MIN_BARS)
}

/// Per-bar checks, independent of neighbours.
pub fn check_bar(bar: &PriceBar) -> Option<BarDefect> {
    let values = [bar.open, bar.high, bar.low, bar.close, bar.volume];
    if values.iter().any(|v| !v.is_finite()) {
        return Some(BarDefect::NonFinite);
    }
    if [bar.open, bar.high, bar.low, bar.close].iter().any(|&p| p <= 0.0) {
        return Some(BarDefect::NonPositivePrice);
    }
    if bar.volume < 0.0 {
        return Some(BarDefect::NegativeVolume);
    }
    if bar.low > bar.high
        || bar.low > bar.open
        || bar.low > bar.close
        || bar.high < bar.open
        || bar.high < bar.close
    {
        return Some(BarDefect::OhlcOrdering);
    }
    None
}
