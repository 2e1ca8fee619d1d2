//! Score normalization and trend-strength assessment

use crate::config::{AnalysisConfig, TrendParams};
use crate::indicators::error::Result;
use crate::indicators::registry::IndicatorId;
use crate::models::indicators::IndicatorBundle;
use crate::models::signal::{
    MaAlignment, MacdSignal, TrendAssessment, TrendComponents, TrendLabel,
};
use crate::signals::interpreter::{latest, SignalInterpreter};

/// Normalize a value to -1 to +1 range
///
/// For indicators that output values in different ranges, this converts them
/// to a standardized -1 (bearish) to +1 (bullish) scale
pub fn normalize_score(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    let normalized = 2.0 * ((value - min) / (max - min)) - 1.0;
    normalized.clamp(-1.0, 1.0)
}

/// Normalize RSI (0-100) to -1 to +1; 50 maps to 0.
pub fn normalize_rsi(rsi: f64) -> f64 {
    normalize_score(rsi, 0.0, 100.0)
}

/// Normalize MACD histogram to -1 to +1
///
/// `scale` is the absolute histogram magnitude that saturates the score.
pub fn normalize_macd_histogram(histogram: f64, scale: f64) -> f64 {
    if scale <= 0.0 || histogram == 0.0 {
        return if histogram == 0.0 { 0.0 } else { histogram.signum() };
    }
    (histogram / scale).clamp(-1.0, 1.0)
}

pub fn normalize_alignment(alignment: MaAlignment) -> f64 {
    match alignment {
        MaAlignment::BullishStack => 1.0,
        MaAlignment::BearishStack => -1.0,
        MaAlignment::Mixed => 0.0,
    }
}

/// MACD contribution to the trend score.
///
/// A histogram that is positive and rising (or negative and falling) counts
/// fully; otherwise the histogram is scaled against `scale`.
pub fn macd_component(histogram: f64, previous: Option<f64>, scale: f64) -> f64 {
    match previous.map(|prev| SignalInterpreter::classify_macd(histogram, prev)) {
        Some(MacdSignal::Bullish) => 1.0,
        Some(MacdSignal::Bearish) => -1.0,
        _ => normalize_macd_histogram(histogram, scale),
    }
}

/// Confidence is the absolute value of the composite score, clamped to [0, 1].
pub fn calculate_confidence(score: f64) -> f64 {
    score.abs().min(1.0)
}

/// Combines MACD histogram, MA alignment and RSI into one trend label.
#[derive(Debug, Clone)]
pub struct TrendScorer {
    params: TrendParams,
    interpreter: SignalInterpreter,
}

impl Default for TrendScorer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl TrendScorer {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            params: config.trend,
            interpreter: SignalInterpreter::from_config(config),
        }
    }

    /// Per-input scores at the last bar.
    ///
    /// # Errors
    /// `UndefinedIndicator` if the histogram, RSI or any of the three moving
    /// averages is still warming up.
    pub fn components(&self, bundle: &IndicatorBundle) -> Result<TrendComponents> {
        let histogram = latest(bundle, IndicatorId::MacdHistogram)?;
        let previous = bundle.macd.histogram.previous();
        let alignment = self.interpreter.ma_alignment(bundle)?;
        let rsi = latest(bundle, IndicatorId::Rsi)?;
        let close = bundle.latest_close().unwrap_or(0.0);
        let scale = close.abs() * self.params.histogram_scale_pct / 100.0;

        Ok(TrendComponents {
            macd: macd_component(histogram, previous, scale),
            ma_alignment: normalize_alignment(alignment),
            rsi: normalize_rsi(rsi),
        })
    }

    pub fn assess(&self, bundle: &IndicatorBundle) -> Result<TrendAssessment> {
        Ok(self.assess_components(self.components(bundle)?))
    }

    pub fn assess_components(&self, components: TrendComponents) -> TrendAssessment {
        let w = &self.params.weights;
        let score = (components.macd * w.macd
            + components.ma_alignment * w.ma_alignment
            + components.rsi * w.rsi)
            .clamp(-1.0, 1.0);

        TrendAssessment {
            label: self.bucket(score),
            confidence: calculate_confidence(score),
            score,
            components,
        }
    }

    /// `[strong, 1]` strong-up, `[weak, strong)` weak-up, `(-weak, weak)`
    /// sideways, mirrored below zero.
    pub fn bucket(&self, score: f64) -> TrendLabel {
        let strong = self.params.strong_threshold;
        let weak = self.params.weak_threshold;
        if score >= strong {
            TrendLabel::StrongUp
        } else if score >= weak {
            TrendLabel::WeakUp
        } else if score > -weak {
            TrendLabel::Sideways
        } else if score > -strong {
            TrendLabel::WeakDown
        } else {
            TrendLabel::StrongDown
        }
    }
}
