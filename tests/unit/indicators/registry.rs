use techscan::config::AnalysisConfig;
use techscan::indicators::{compute_bundle, validate_series, IndicatorCategory, IndicatorId};

use crate::fixtures::wave_series;

#[test]
fn test_names() {
    assert_eq!(IndicatorId::Ma(20).name(), "ma20");
    assert_eq!(IndicatorId::Ema(12).to_string(), "ema12");
    assert_eq!(IndicatorId::VolumeMa(5).name(), "vol_ma5");
    assert_eq!(IndicatorId::MacdHistogram.name(), "macd_histogram");
    assert_eq!(IndicatorId::J.name(), "kdj_j");
}

#[test]
fn test_categories() {
    assert_eq!(IndicatorId::Ma(5).category(), IndicatorCategory::Trend);
    assert_eq!(IndicatorId::K.category(), IndicatorCategory::Momentum);
    assert_eq!(IndicatorId::Atr.category(), IndicatorCategory::Volatility);
    assert_eq!(IndicatorId::Obv.category(), IndicatorCategory::Volume);
}

#[test]
fn test_bundle_covers_configured_indicators() {
    let series = wave_series(120);
    let validated = validate_series(&series, 60).unwrap();
    let bundle = compute_bundle(&validated, &AnalysisConfig::default()).unwrap();

    assert_eq!(bundle.len(), 120);
    // 4 MA + 3 EMA + 15 fixed + 3 volume MA
    assert_eq!(bundle.ids().len(), 25);

    let named = bundle.named();
    for key in ["ma60", "ema26", "rsi", "macd_signal", "boll_percent_b", "kdj_j", "atr", "obv", "vol_ma20"] {
        assert!(named.contains_key(key), "missing {key}");
    }
    assert!(named.values().all(|series| series.len() == 120));
}

#[test]
fn test_bundle_lookup() {
    let series = wave_series(80);
    let validated = validate_series(&series, 60).unwrap();
    let bundle = compute_bundle(&validated, &AnalysisConfig::default()).unwrap();

    assert!(bundle.get(IndicatorId::Ma(7)).is_none());
    assert_eq!(bundle.get(IndicatorId::Ma(60)).unwrap().first_defined(), Some(59));
    assert_eq!(bundle.get(IndicatorId::Obv).unwrap().first_defined(), Some(0));
    assert_eq!(bundle.latest_close(), series.last().map(|bar| bar.close));
}
