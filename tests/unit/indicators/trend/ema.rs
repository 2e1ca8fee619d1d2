use techscan::indicators::trend::{calculate_ema, calculate_emas, DEFAULT_EMA_PERIODS};

use crate::fixtures::{approx_eq, series_from_closes, wave_series};

#[test]
fn test_ema_seed_and_recursion() {
    let series = series_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let ema = calculate_ema(&series, 3).unwrap();
    assert_eq!(ema.get(0), None);
    assert_eq!(ema.get(1), None);
    assert!(approx_eq(ema.get(2).unwrap(), 2.0));
    // alpha = 0.5
    assert!(approx_eq(ema.get(3).unwrap(), 3.0));
    assert!(approx_eq(ema.get(4).unwrap(), 4.0));
}

#[test]
fn test_ema_of_constant_is_constant() {
    let series = series_from_closes(&[7.5; 30]);
    let ema = calculate_ema(&series, 12).unwrap();
    assert_eq!(ema.first_defined(), Some(11));
    assert!(ema.iter().flatten().all(|v| approx_eq(v, 7.5)));
}

#[test]
fn test_default_periods() {
    let series = wave_series(40);
    let emas = calculate_emas(&series, &DEFAULT_EMA_PERIODS).unwrap();
    assert_eq!(emas.len(), 3);
    for (period, ema) in &emas {
        assert_eq!(ema.len(), 40);
        assert_eq!(ema.first_defined(), Some(period - 1));
    }
}

#[test]
fn test_zero_period_rejected() {
    let series = series_from_closes(&[1.0, 2.0]);
    assert!(calculate_ema(&series, 0).is_err());
}
