use techscan::indicators::{check_bar, validate_series, validate_series_default};
use techscan::models::{PriceBar, PriceSeries};
use techscan::{BarDefect, IndicatorError};

use crate::fixtures::{day, series_from_closes, wave_series};

fn closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

fn with_bar(mut bars: Vec<PriceBar>, index: usize, bar: PriceBar) -> PriceSeries {
    bars[index] = bar;
    PriceSeries::from_bars(&bars)
}

#[test]
fn test_valid_series_passes() {
    let series = wave_series(80);
    let validated = validate_series_default(&series).unwrap();
    assert_eq!(validated.len(), 80);
    assert_eq!(validated.series(), &series);
}

#[test]
fn test_short_series_is_insufficient() {
    let series = series_from_closes(&closes(59));
    let err = validate_series_default(&series).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InsufficientData {
            required: 60,
            available: 59
        }
    );
}

#[test]
fn test_custom_minimum() {
    let series = series_from_closes(&closes(10));
    assert!(validate_series(&series, 10).is_ok());
    assert!(validate_series(&series, 11).is_err());
}

#[test]
fn test_length_checked_before_bars() {
    let bars = series_from_closes(&closes(5)).bars().collect::<Vec<_>>();
    let series = with_bar(bars, 2, PriceBar::new(day(2), 10.0, 9.0, 11.0, 10.0, 1.0));
    assert!(matches!(
        validate_series(&series, 60),
        Err(IndicatorError::InsufficientData { .. })
    ));
}

#[test]
fn test_high_below_low_is_malformed() {
    let bars = series_from_closes(&closes(60)).bars().collect::<Vec<_>>();
    let series = with_bar(bars, 7, PriceBar::new(day(7), 10.0, 9.0, 11.0, 10.0, 1.0));
    let err = validate_series_default(&series).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::MalformedBar {
            index: 7,
            date: day(7),
            reason: BarDefect::OhlcOrdering
        }
    );
}

#[test]
fn test_close_outside_range_is_malformed() {
    let bar = PriceBar::new(day(0), 10.0, 11.0, 9.0, 11.5, 1.0);
    assert_eq!(check_bar(&bar), Some(BarDefect::OhlcOrdering));
}

#[test]
fn test_non_positive_and_non_finite_prices() {
    let zero = PriceBar::new(day(0), 0.0, 1.0, 0.0, 0.5, 1.0);
    assert_eq!(check_bar(&zero), Some(BarDefect::NonPositivePrice));

    let nan = PriceBar::new(day(0), 10.0, f64::NAN, 9.0, 10.0, 1.0);
    assert_eq!(check_bar(&nan), Some(BarDefect::NonFinite));

    let inf_volume = PriceBar::new(day(0), 10.0, 11.0, 9.0, 10.0, f64::INFINITY);
    assert_eq!(check_bar(&inf_volume), Some(BarDefect::NonFinite));
}

#[test]
fn test_negative_volume() {
    let bar = PriceBar::new(day(0), 10.0, 11.0, 9.0, 10.0, -5.0);
    assert_eq!(check_bar(&bar), Some(BarDefect::NegativeVolume));
}

#[test]
fn test_zero_volume_is_allowed() {
    let bar = PriceBar::new(day(0), 10.0, 11.0, 9.0, 10.0, 0.0);
    assert_eq!(check_bar(&bar), None);
}

#[test]
fn test_duplicate_date_is_malformed() {
    let bars = series_from_closes(&closes(60)).bars().collect::<Vec<_>>();
    let duplicate = PriceBar { date: day(29), ..bars[30] };
    let series = with_bar(bars, 30, duplicate);
    let err = validate_series_default(&series).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::MalformedBar {
            index: 30,
            date: day(29),
            reason: BarDefect::DateNotAscending
        }
    );
}

#[test]
fn test_first_violation_wins() {
    let mut bars = series_from_closes(&closes(60)).bars().collect::<Vec<_>>();
    bars[40] = PriceBar::new(day(40), 10.0, 11.0, 9.0, 10.0, -1.0);
    bars[12] = PriceBar::new(day(12), 10.0, 9.0, 11.0, 10.0, 1.0);
    let series = PriceSeries::from_bars(&bars);
    match validate_series_default(&series) {
        Err(IndicatorError::MalformedBar { index, .. }) => assert_eq!(index, 12),
        other => panic!("expected malformed bar, got {other:?}"),
    }
}
