//! One-call analysis pipeline: validate, compute, interpret.

use tracing::{debug, info, instrument};

use crate::config::AnalysisConfig;
use crate::indicators::error::Result;
use crate::indicators::registry::compute_bundle;
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::validation::validate_series;
use crate::models::indicators::IndicatorBundle;
use crate::models::report::{LatestValues, TechnicalReport};
use crate::models::PriceSeries;
use crate::signals::interpreter::SignalInterpreter;
use crate::signals::scoring::TrendScorer;

/// Stateless analysis entry point. Holds only configuration, so a single
/// engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
    interpreter: SignalInterpreter,
    scorer: TrendScorer,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::build(AnalysisConfig::default())
    }
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AnalysisConfig) -> Self {
        Self {
            interpreter: SignalInterpreter::from_config(&config),
            scorer: TrendScorer::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Indicator series only, after validation against `min_bars`.
    pub fn indicators(&self, series: &PriceSeries) -> Result<IndicatorBundle> {
        let validated = validate_series(series, self.config.min_bars)?;
        compute_bundle(&validated, &self.config)
    }

    /// Full report for one instrument.
    ///
    /// Signals, levels and trend all read the same bundle and do not depend
    /// on each other.
    #[instrument(skip_all, fields(bars = series.len()))]
    pub fn analyze(&self, series: &PriceSeries) -> Result<TechnicalReport> {
        let validated = validate_series(series, self.config.min_bars)?;
        let indicators = compute_bundle(&validated, &self.config)?;

        let signals = self.interpreter.interpret(&indicators)?;
        let levels = calculate_support_resistance(&validated, &self.config.levels)?;
        let trend = self.scorer.assess(&indicators)?;
        debug!(?signals, ?levels, "Signals and levels computed");

        let latest = latest_values(&indicators, series);
        info!(
            trend = %trend.label,
            confidence = trend.confidence,
            "Analysis complete"
        );

        Ok(TechnicalReport {
            indicators,
            latest,
            signals,
            levels,
            trend,
        })
    }
}

fn latest_values(bundle: &IndicatorBundle, series: &PriceSeries) -> LatestValues {
    let volume_ratio = series.last().and_then(|bar| {
        let (_, shortest) = bundle.volume_ma.iter().next()?;
        let average = shortest.latest()?;
        (average > 0.0).then(|| bar.volume / average)
    });

    LatestValues {
        close: bundle.latest_close().unwrap_or_default(),
        rsi: bundle.rsi.latest(),
        macd: bundle.macd.macd.latest(),
        macd_signal: bundle.macd.signal.latest(),
        macd_histogram: bundle.macd.histogram.latest(),
        k: bundle.kdj.k.latest(),
        d: bundle.kdj.d.latest(),
        j: bundle.kdj.j.latest(),
        percent_b: bundle.bollinger.percent_b.latest(),
        atr: bundle.atr.latest(),
        obv: bundle.obv.latest(),
        volume_ratio,
    }
}
