//! Analysis parameters with defaults matching common charting conventions.
//!
//! Values can be overridden from `TECHSCAN_*` environment variables (a `.env`
//! file is honoured) or parsed from JSON.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::indicators::error::{IndicatorError, Result};

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("TECHSCAN_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerParams {
    pub period: usize,
    pub std_dev: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

/// Starting value for the K and D running averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KdjSeed {
    Fixed(f64),
    /// Seed with the first defined input (K with the first RSV, D with the first K).
    FirstValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdjParams {
    pub period: usize,
    pub k_smoothing: usize,
    pub d_smoothing: usize,
    pub seed: KdjSeed,
}

impl Default for KdjParams {
    fn default() -> Self {
        Self {
            period: 9,
            k_smoothing: 3,
            d_smoothing: 3,
            seed: KdjSeed::Fixed(50.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelParams {
    /// Trailing bars searched for extrema.
    pub window: usize,
    /// Bars on each side a candidate must dominate.
    pub neighborhood: usize,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            window: 60,
            neighborhood: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub kdj_oversold: f64,
    pub kdj_overbought: f64,
    pub band_near_lower: f64,
    pub band_near_upper: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            kdj_oversold: 20.0,
            kdj_overbought: 80.0,
            band_near_lower: 0.2,
            band_near_upper: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendWeights {
    pub macd: f64,
    pub ma_alignment: f64,
    pub rsi: f64,
}

impl Default for TrendWeights {
    fn default() -> Self {
        Self {
            macd: 0.4,
            ma_alignment: 0.4,
            rsi: 0.2,
        }
    }
}

impl TrendWeights {
    pub fn new(macd: f64, ma_alignment: f64, rsi: f64) -> Result<Self> {
        let weights = Self {
            macd,
            ma_alignment,
            rsi,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        if self.macd < 0.0 || self.ma_alignment < 0.0 || self.rsi < 0.0 {
            return Err(IndicatorError::invalid_parameter(
                "trend weights must be non-negative",
            ));
        }
        let total = self.macd + self.ma_alignment + self.rsi;
        if (total - 1.0).abs() > 0.001 {
            return Err(IndicatorError::invalid_parameter(format!(
                "trend weights must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendParams {
    pub weights: TrendWeights,
    pub strong_threshold: f64,
    pub weak_threshold: f64,
    /// Histogram magnitude, as a percent of close, that saturates the MACD component.
    pub histogram_scale_pct: f64,
    pub short_ma: usize,
    pub medium_ma: usize,
    pub long_ma: usize,
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            weights: TrendWeights::default(),
            strong_threshold: 0.6,
            weak_threshold: 0.2,
            histogram_scale_pct: 0.5,
            short_ma: 5,
            medium_ma: 20,
            long_ma: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum bars a series must have before anything is computed.
    pub min_bars: usize,
    pub ma_periods: Vec<usize>,
    pub ema_periods: Vec<usize>,
    pub volume_ma_periods: Vec<usize>,
    pub rsi_period: usize,
    pub macd: MacdParams,
    pub bollinger: BollingerParams,
    pub kdj: KdjParams,
    pub atr_period: usize,
    pub levels: LevelParams,
    pub thresholds: SignalThresholds,
    pub trend: TrendParams,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_bars: 60,
            ma_periods: vec![5, 10, 20, 60],
            ema_periods: vec![5, 12, 26],
            volume_ma_periods: vec![5, 10, 20],
            rsi_period: 14,
            macd: MacdParams::default(),
            bollinger: BollingerParams::default(),
            kdj: KdjParams::default(),
            atr_period: 14,
            levels: LevelParams::default(),
            thresholds: SignalThresholds::default(),
            trend: TrendParams::default(),
        }
    }
}

impl AnalysisConfig {
    /// Defaults overridden by `TECHSCAN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `TECHSCAN_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        apply_override(&lookup, "TECHSCAN_MIN_BARS", &mut config.min_bars);
        apply_override(&lookup, "TECHSCAN_RSI_PERIOD", &mut config.rsi_period);
        apply_override(&lookup, "TECHSCAN_ATR_PERIOD", &mut config.atr_period);
        apply_override(&lookup, "TECHSCAN_MACD_FAST", &mut config.macd.fast);
        apply_override(&lookup, "TECHSCAN_MACD_SLOW", &mut config.macd.slow);
        apply_override(&lookup, "TECHSCAN_MACD_SIGNAL", &mut config.macd.signal);
        apply_override(&lookup, "TECHSCAN_BOLL_PERIOD", &mut config.bollinger.period);
        apply_override(&lookup, "TECHSCAN_BOLL_STD_DEV", &mut config.bollinger.std_dev);
        apply_override(&lookup, "TECHSCAN_KDJ_PERIOD", &mut config.kdj.period);
        apply_override(&lookup, "TECHSCAN_KDJ_K_SMOOTHING", &mut config.kdj.k_smoothing);
        apply_override(&lookup, "TECHSCAN_KDJ_D_SMOOTHING", &mut config.kdj.d_smoothing);
        apply_override(&lookup, "TECHSCAN_LEVEL_WINDOW", &mut config.levels.window);
        apply_override(&lookup, "TECHSCAN_LEVEL_NEIGHBORHOOD", &mut config.levels.neighborhood);

        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| IndicatorError::invalid_parameter(format!("config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let periods = self
            .ma_periods
            .iter()
            .chain(&self.ema_periods)
            .chain(&self.volume_ma_periods)
            .chain([
                &self.rsi_period,
                &self.atr_period,
                &self.macd.fast,
                &self.macd.slow,
                &self.macd.signal,
                &self.kdj.period,
                &self.kdj.k_smoothing,
                &self.kdj.d_smoothing,
                &self.levels.window,
                &self.trend.short_ma,
                &self.trend.medium_ma,
                &self.trend.long_ma,
            ]);
        for &period in periods {
            if period == 0 {
                return Err(IndicatorError::invalid_parameter("periods must be > 0"));
            }
        }
        if self.macd.fast >= self.macd.slow {
            return Err(IndicatorError::invalid_parameter(
                "MACD fast period must be < slow period",
            ));
        }
        if self.bollinger.period < 2 {
            return Err(IndicatorError::invalid_parameter(
                "Bollinger period must be at least 2",
            ));
        }
        if !(self.bollinger.std_dev.is_finite() && self.bollinger.std_dev > 0.0) {
            return Err(IndicatorError::invalid_parameter(
                "Bollinger std_dev must be positive",
            ));
        }
        let t = &self.trend;
        if !(0.0 < t.weak_threshold && t.weak_threshold < t.strong_threshold && t.strong_threshold <= 1.0) {
            return Err(IndicatorError::invalid_parameter(
                "trend thresholds must satisfy 0 < weak < strong <= 1",
            ));
        }
        for period in [t.short_ma, t.medium_ma, t.long_ma] {
            if !self.ma_periods.contains(&period) {
                return Err(IndicatorError::invalid_parameter(format!(
                    "trend MA period {period} is not in ma_periods"
                )));
            }
        }
        if t.histogram_scale_pct <= 0.0 {
            return Err(IndicatorError::invalid_parameter(
                "histogram_scale_pct must be positive",
            ));
        }
        t.weights.validate()
    }

    /// Bars needed before every configured signal is defined at the last bar.
    ///
    /// The MACD term is one bar past the histogram warm-up because the MACD
    /// signal compares the latest histogram with the previous one.
    pub fn longest_lookback(&self) -> usize {
        let macd_warmup = self.macd.slow + self.macd.signal;
        self.ma_periods
            .iter()
            .chain(&self.ema_periods)
            .chain(&self.volume_ma_periods)
            .copied()
            .chain([
                self.rsi_period + 1,
                self.atr_period,
                macd_warmup,
                self.bollinger.period,
                self.kdj.period,
                self.trend.long_ma,
            ])
            .max()
            .unwrap_or(0)
    }
}

fn apply_override<T, F>(lookup: &F, key: &str, target: &mut T)
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "Ignoring unparsable config override"),
    }
}
