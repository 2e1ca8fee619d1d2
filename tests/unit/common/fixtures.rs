//! Series builders shared by the unit tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use techscan::models::{PriceBar, PriceSeries};

pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap() + Duration::days(offset as i64)
}

/// Bars with open == close and a symmetric ±0.5 range.
pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(day(i), c, c + 0.5, c - 0.5, c, 1000.0))
        .collect()
}

/// Bars with open == close and a symmetric ±`spread` range.
pub fn series_with_spread(closes: &[f64], spread: f64) -> PriceSeries {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(day(i), c, c + spread, c - spread, c, 1000.0))
        .collect()
}

/// Oscillating, slightly trending series with varying volume.
pub fn wave_series(count: usize) -> PriceSeries {
    let mut bars = Vec::with_capacity(count);
    let mut prev_close = 100.0;
    for i in 0..count {
        let change = (i as f64 * 0.7).sin() * 2.0 + (i as f64 * 0.13).cos() * 0.8 + 0.1;
        let close = (prev_close + change).max(1.0);
        let open = prev_close;
        let high = open.max(close) + 0.4 + (i % 3) as f64 * 0.2;
        let low = (open.min(close) - 0.4 - (i % 2) as f64 * 0.3).max(0.5);
        let volume = 1000.0 + ((i * 37) % 500) as f64;
        bars.push(PriceBar::new(day(i), open, high, low, close, volume));
        prev_close = close;
    }
    PriceSeries::from_bars(&bars)
}

/// Closes growing 2% per bar.
pub fn exponential_uptrend(count: usize) -> PriceSeries {
    (0..count)
        .map(|i| {
            let close = 100.0 * 1.02_f64.powi(i as i32);
            let open = close / 1.01;
            PriceBar::new(day(i), open, close * 1.005, open * 0.995, close, 1000.0 + i as f64)
        })
        .collect()
}

/// Mirror image of [`exponential_uptrend`].
pub fn exponential_downtrend(count: usize) -> PriceSeries {
    (0..count)
        .map(|i| {
            let close = 1000.0 * 0.98_f64.powi(i as i32);
            let open = close * 1.01;
            PriceBar::new(day(i), open, open * 1.005, close * 0.995, close, 1000.0 + i as f64)
        })
        .collect()
}
