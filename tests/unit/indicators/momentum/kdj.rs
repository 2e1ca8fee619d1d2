use techscan::config::{KdjParams, KdjSeed};
use techscan::indicators::momentum::{calculate_kdj, calculate_kdj_default, FLAT_RSV};

use crate::fixtures::{approx_eq, series_from_closes, series_with_spread, wave_series};

#[test]
fn test_flat_series_is_fifty() {
    let series = series_with_spread(&[10.0; 20], 0.0);
    let kdj = calculate_kdj_default(&series).unwrap();
    assert_eq!(kdj.rsv.first_defined(), Some(8));
    for i in 8..20 {
        assert_eq!(kdj.rsv.get(i), Some(FLAT_RSV));
        assert!(approx_eq(kdj.k.get(i).unwrap(), 50.0));
        assert!(approx_eq(kdj.d.get(i).unwrap(), 50.0));
        assert!(approx_eq(kdj.j.get(i).unwrap(), 50.0));
    }
    assert_eq!(kdj.k.get(7), None);
}

#[test]
fn test_j_identity() {
    let kdj = calculate_kdj_default(&wave_series(80)).unwrap();
    for i in 8..80 {
        let (k, d, j) = (kdj.k.get(i).unwrap(), kdj.d.get(i).unwrap(), kdj.j.get(i).unwrap());
        assert!(approx_eq(j, 3.0 * k - 2.0 * d));
    }
}

#[test]
fn test_rsv_and_k_within_bounds() {
    let kdj = calculate_kdj_default(&wave_series(150)).unwrap();
    assert!(kdj.rsv.iter().flatten().all(|v| (0.0..=100.0).contains(&v)));
    assert!(kdj.k.iter().flatten().all(|v| (0.0..=100.0).contains(&v)));
    assert!(kdj.d.iter().flatten().all(|v| (0.0..=100.0).contains(&v)));
}

#[test]
fn test_first_k_uses_fixed_seed() {
    let kdj = calculate_kdj_default(&wave_series(30)).unwrap();
    let rsv = kdj.rsv.get(8).unwrap();
    let k = kdj.k.get(8).unwrap();
    assert!(approx_eq(k, 50.0 * 2.0 / 3.0 + rsv / 3.0));
}

#[test]
fn test_first_value_seed() {
    let params = KdjParams {
        seed: KdjSeed::FirstValue,
        ..KdjParams::default()
    };
    let kdj = calculate_kdj(&wave_series(30), &params).unwrap();
    assert_eq!(kdj.k.get(8), kdj.rsv.get(8));
    assert_eq!(kdj.d.get(8), kdj.k.get(8));
}

#[test]
fn test_close_at_window_high() {
    let closes: Vec<f64> = (0..12).map(|i| 10.0 + i as f64).collect();
    let kdj = calculate_kdj_default(&series_with_spread(&closes, 0.0)).unwrap();
    assert_eq!(kdj.rsv.latest(), Some(100.0));
}

#[test]
fn test_zero_period_rejected() {
    let params = KdjParams {
        period: 0,
        ..KdjParams::default()
    };
    assert!(calculate_kdj(&series_from_closes(&[1.0; 10]), &params).is_err());
}
