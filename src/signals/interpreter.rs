//! Maps the latest indicator values to categorical signals.

use crate::config::{AnalysisConfig, SignalThresholds, TrendParams};
use crate::indicators::error::{IndicatorError, Result};
use crate::indicators::registry::IndicatorId;
use crate::indicators::trend::classify_alignment;
use crate::models::indicators::IndicatorBundle;
use crate::models::signal::{
    BandZone, BollingerSignal, JExtreme, KdjSignal, MaAlignment, MacdSignal, PartialSignalSet,
    RsiSignal, SignalSet,
};

#[derive(Debug, Clone)]
pub struct SignalInterpreter {
    thresholds: SignalThresholds,
    ma_periods: (usize, usize, usize),
}

impl Default for SignalInterpreter {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl SignalInterpreter {
    pub fn new(thresholds: SignalThresholds, trend: &TrendParams) -> Self {
        Self {
            thresholds,
            ma_periods: (trend.short_ma, trend.medium_ma, trend.long_ma),
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.thresholds, &config.trend)
    }

    /// Every signal at the last bar.
    ///
    /// # Errors
    /// [`IndicatorError::UndefinedIndicator`] for the first indicator still in
    /// warm-up, checked in the order RSI, MACD, KDJ, Bollinger, MA alignment.
    pub fn interpret(&self, bundle: &IndicatorBundle) -> Result<SignalSet> {
        Ok(SignalSet {
            rsi: self.rsi_signal(bundle)?,
            macd: self.macd_signal(bundle)?,
            kdj: self.kdj_signal(bundle)?,
            kdj_j: self.j_extreme(bundle)?,
            bollinger: self.bollinger_signal(bundle)?,
            band_zone: self.band_zone(bundle)?,
            ma_alignment: self.ma_alignment(bundle)?,
        })
    }

    /// Signals for the indicators that are defined; the rest stay `None`.
    pub fn interpret_available(&self, bundle: &IndicatorBundle) -> PartialSignalSet {
        PartialSignalSet {
            rsi: self.rsi_signal(bundle).ok(),
            macd: self.macd_signal(bundle).ok(),
            kdj: self.kdj_signal(bundle).ok(),
            kdj_j: self.j_extreme(bundle).ok(),
            bollinger: self.bollinger_signal(bundle).ok(),
            band_zone: self.band_zone(bundle).ok(),
            ma_alignment: self.ma_alignment(bundle).ok(),
        }
    }

    pub fn classify_rsi(&self, rsi: f64) -> RsiSignal {
        if rsi < self.thresholds.rsi_oversold {
            RsiSignal::Oversold
        } else if rsi > self.thresholds.rsi_overbought {
            RsiSignal::Overbought
        } else {
            RsiSignal::Neutral
        }
    }

    /// Positive and rising histogram is bullish, negative and falling bearish.
    pub fn classify_macd(histogram: f64, previous: f64) -> MacdSignal {
        if histogram > 0.0 && histogram > previous {
            MacdSignal::Bullish
        } else if histogram < 0.0 && histogram < previous {
            MacdSignal::Bearish
        } else {
            MacdSignal::Neutral
        }
    }

    pub fn classify_kdj(&self, k: f64, d: f64) -> KdjSignal {
        let t = &self.thresholds;
        if k > t.kdj_overbought && d > t.kdj_overbought {
            KdjSignal::Overbought
        } else if k < t.kdj_oversold && d < t.kdj_oversold {
            KdjSignal::Oversold
        } else {
            KdjSignal::Ranging
        }
    }

    pub fn classify_j(j: f64) -> JExtreme {
        if j > 100.0 {
            JExtreme::AboveRange
        } else if j < 0.0 {
            JExtreme::BelowRange
        } else {
            JExtreme::InRange
        }
    }

    pub fn classify_bollinger(close: f64, upper: f64, lower: f64) -> BollingerSignal {
        if close > upper {
            BollingerSignal::OverextendedUp
        } else if close < lower {
            BollingerSignal::OverextendedDown
        } else {
            BollingerSignal::WithinBand
        }
    }

    pub fn classify_band_zone(&self, close: f64, upper: f64, lower: f64) -> BandZone {
        if close > upper {
            return BandZone::AboveBand;
        }
        if close < lower {
            return BandZone::BelowBand;
        }
        if upper <= lower {
            return BandZone::Middle;
        }
        let percent_b = (close - lower) / (upper - lower);
        if percent_b > self.thresholds.band_near_upper {
            BandZone::NearUpper
        } else if percent_b < self.thresholds.band_near_lower {
            BandZone::NearLower
        } else {
            BandZone::Middle
        }
    }

    fn rsi_signal(&self, bundle: &IndicatorBundle) -> Result<RsiSignal> {
        Ok(self.classify_rsi(latest(bundle, IndicatorId::Rsi)?))
    }

    fn macd_signal(&self, bundle: &IndicatorBundle) -> Result<MacdSignal> {
        let histogram = latest(bundle, IndicatorId::MacdHistogram)?;
        let previous = bundle
            .macd
            .histogram
            .previous()
            .ok_or_else(|| IndicatorError::undefined(IndicatorId::MacdHistogram.name()))?;
        Ok(Self::classify_macd(histogram, previous))
    }

    fn kdj_signal(&self, bundle: &IndicatorBundle) -> Result<KdjSignal> {
        let k = latest(bundle, IndicatorId::K)?;
        let d = latest(bundle, IndicatorId::D)?;
        Ok(self.classify_kdj(k, d))
    }

    fn j_extreme(&self, bundle: &IndicatorBundle) -> Result<JExtreme> {
        Ok(Self::classify_j(latest(bundle, IndicatorId::J)?))
    }

    fn band_inputs(&self, bundle: &IndicatorBundle) -> Result<(f64, f64, f64)> {
        let upper = latest(bundle, IndicatorId::BollUpper)?;
        let lower = latest(bundle, IndicatorId::BollLower)?;
        let close = bundle
            .latest_close()
            .ok_or_else(|| IndicatorError::undefined("close"))?;
        Ok((close, upper, lower))
    }

    fn bollinger_signal(&self, bundle: &IndicatorBundle) -> Result<BollingerSignal> {
        let (close, upper, lower) = self.band_inputs(bundle)?;
        Ok(Self::classify_bollinger(close, upper, lower))
    }

    fn band_zone(&self, bundle: &IndicatorBundle) -> Result<BandZone> {
        let (close, upper, lower) = self.band_inputs(bundle)?;
        Ok(self.classify_band_zone(close, upper, lower))
    }

    pub(crate) fn ma_alignment(&self, bundle: &IndicatorBundle) -> Result<MaAlignment> {
        let (short, medium, long) = self.ma_periods;
        Ok(classify_alignment(
            latest(bundle, IndicatorId::Ma(short))?,
            latest(bundle, IndicatorId::Ma(medium))?,
            latest(bundle, IndicatorId::Ma(long))?,
        ))
    }
}

/// Latest value of `id`, or `UndefinedIndicator` if absent or warming up.
pub(crate) fn latest(bundle: &IndicatorBundle, id: IndicatorId) -> Result<f64> {
    bundle
        .get(id)
        .and_then(|series| series.latest())
        .ok_or_else(|| IndicatorError::undefined(id.name()))
}
