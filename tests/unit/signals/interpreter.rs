use techscan::config::AnalysisConfig;
use techscan::indicators::{compute_bundle, validate_series};
use techscan::models::{
    BandZone, BollingerSignal, IndicatorBundle, JExtreme, KdjSignal, MacdSignal, RsiSignal,
};
use techscan::signals::SignalInterpreter;
use techscan::IndicatorError;

use crate::fixtures::{exponential_uptrend, wave_series};

fn bundle(series: &techscan::PriceSeries) -> IndicatorBundle {
    let validated = validate_series(series, 1).unwrap();
    compute_bundle(&validated, &AnalysisConfig::default()).unwrap()
}

#[test]
fn test_rsi_thresholds_are_strict() {
    let interpreter = SignalInterpreter::default();
    assert_eq!(interpreter.classify_rsi(29.9), RsiSignal::Oversold);
    assert_eq!(interpreter.classify_rsi(30.0), RsiSignal::Neutral);
    assert_eq!(interpreter.classify_rsi(70.0), RsiSignal::Neutral);
    assert_eq!(interpreter.classify_rsi(70.1), RsiSignal::Overbought);
}

#[test]
fn test_macd_direction() {
    assert_eq!(SignalInterpreter::classify_macd(0.5, 0.2), MacdSignal::Bullish);
    assert_eq!(SignalInterpreter::classify_macd(0.5, 0.8), MacdSignal::Neutral);
    assert_eq!(SignalInterpreter::classify_macd(-0.5, -0.2), MacdSignal::Bearish);
    assert_eq!(SignalInterpreter::classify_macd(-0.5, -0.8), MacdSignal::Neutral);
    assert_eq!(SignalInterpreter::classify_macd(0.0, -1.0), MacdSignal::Neutral);
}

#[test]
fn test_kdj_requires_both_lines() {
    let interpreter = SignalInterpreter::default();
    assert_eq!(interpreter.classify_kdj(85.0, 81.0), KdjSignal::Overbought);
    assert_eq!(interpreter.classify_kdj(85.0, 75.0), KdjSignal::Ranging);
    assert_eq!(interpreter.classify_kdj(10.0, 15.0), KdjSignal::Oversold);
    assert_eq!(interpreter.classify_kdj(20.0, 15.0), KdjSignal::Ranging);
}

#[test]
fn test_j_extremes() {
    assert_eq!(SignalInterpreter::classify_j(104.0), JExtreme::AboveRange);
    assert_eq!(SignalInterpreter::classify_j(100.0), JExtreme::InRange);
    assert_eq!(SignalInterpreter::classify_j(-3.0), JExtreme::BelowRange);
}

#[test]
fn test_bollinger_position() {
    assert_eq!(SignalInterpreter::classify_bollinger(11.0, 10.0, 8.0), BollingerSignal::OverextendedUp);
    assert_eq!(SignalInterpreter::classify_bollinger(10.0, 10.0, 8.0), BollingerSignal::WithinBand);
    assert_eq!(SignalInterpreter::classify_bollinger(7.9, 10.0, 8.0), BollingerSignal::OverextendedDown);
}

#[test]
fn test_band_zone() {
    let interpreter = SignalInterpreter::default();
    assert_eq!(interpreter.classify_band_zone(12.0, 10.0, 0.0), BandZone::AboveBand);
    assert_eq!(interpreter.classify_band_zone(9.0, 10.0, 0.0), BandZone::NearUpper);
    assert_eq!(interpreter.classify_band_zone(5.0, 10.0, 0.0), BandZone::Middle);
    assert_eq!(interpreter.classify_band_zone(1.0, 10.0, 0.0), BandZone::NearLower);
    assert_eq!(interpreter.classify_band_zone(-1.0, 10.0, 0.0), BandZone::BelowBand);
    assert_eq!(interpreter.classify_band_zone(5.0, 5.0, 5.0), BandZone::Middle);
}

#[test]
fn test_short_history_reports_undefined_macd() {
    let bundle = bundle(&wave_series(20));
    let err = SignalInterpreter::default().interpret(&bundle).unwrap_err();
    assert_eq!(err, IndicatorError::undefined("macd_histogram"));
}

#[test]
fn test_interpret_available_with_short_history() {
    let bundle = bundle(&wave_series(20));
    let partial = SignalInterpreter::default().interpret_available(&bundle);
    assert!(partial.rsi.is_some());
    assert!(partial.kdj.is_some());
    assert!(partial.bollinger.is_some());
    assert!(partial.macd.is_none());
    assert!(partial.ma_alignment.is_none());
    assert!(!partial.is_complete());
}

#[test]
fn test_full_history_interprets_everything() {
    let bundle = bundle(&exponential_uptrend(100));
    let interpreter = SignalInterpreter::default();
    let signals = interpreter.interpret(&bundle).unwrap();

    assert_eq!(signals.rsi, RsiSignal::Overbought);
    assert_eq!(signals.macd, MacdSignal::Bullish);
    assert_eq!(Some(signals.clone()), interpreter.interpret_available(&bundle).complete());

    let labels = signals.labels();
    assert_eq!(labels["rsi"], "overbought");
    assert_eq!(labels["ma_alignment"], "bullish_stack");
    assert_eq!(labels.len(), 7);
}
