use techscan::indicators::volatility::{calculate_bollinger_bands, calculate_bollinger_bands_default};

use crate::fixtures::{approx_eq, series_from_closes, wave_series};

#[test]
fn test_bands_by_hand() {
    // mean 4, sample deviation 2
    let series = series_from_closes(&[2.0, 4.0, 6.0]);
    let bands = calculate_bollinger_bands(&series, 3, 2.0).unwrap();
    assert!(approx_eq(bands.middle.get(2).unwrap(), 4.0));
    assert!(approx_eq(bands.upper.get(2).unwrap(), 8.0));
    assert!(approx_eq(bands.lower.get(2).unwrap(), 0.0));
    assert!(approx_eq(bands.width.get(2).unwrap(), 2.0));
    assert!(approx_eq(bands.percent_b.get(2).unwrap(), 0.75));
    assert_eq!(bands.upper.get(1), None);
}

#[test]
fn test_constant_series_collapses_band() {
    let bands = calculate_bollinger_bands_default(&series_from_closes(&[42.0; 25])).unwrap();
    assert_eq!(bands.upper.latest(), Some(42.0));
    assert_eq!(bands.lower.latest(), Some(42.0));
    assert_eq!(bands.width.latest(), Some(0.0));
    assert_eq!(bands.percent_b.latest(), None);
}

#[test]
fn test_band_ordering() {
    let bands = calculate_bollinger_bands_default(&wave_series(120)).unwrap();
    assert_eq!(bands.middle.first_defined(), Some(19));
    for i in 19..120 {
        let (u, m, l) = (
            bands.upper.get(i).unwrap(),
            bands.middle.get(i).unwrap(),
            bands.lower.get(i).unwrap(),
        );
        assert!(l <= m && m <= u);
    }
}

#[test]
fn test_invalid_parameters() {
    let series = series_from_closes(&[1.0; 30]);
    assert!(calculate_bollinger_bands(&series, 1, 2.0).is_err());
    assert!(calculate_bollinger_bands(&series, 20, 0.0).is_err());
    assert!(calculate_bollinger_bands(&series, 20, f64::NAN).is_err());
}
