//! Indicator identifiers and bundle computation

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::indicators::error::Result;
use crate::indicators::momentum::{calculate_kdj, calculate_macd, calculate_rsi};
use crate::indicators::trend::{calculate_emas, calculate_mas};
use crate::indicators::validation::ValidatedSeries;
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::indicators::volume::{calculate_obv, calculate_volume_mas};
use crate::models::indicators::{IndicatorBundle, IndicatorSeries};

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
}

/// One named output series in an [`IndicatorBundle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndicatorId {
    Ma(usize),
    Ema(usize),
    Rsi,
    Macd,
    MacdSignal,
    MacdHistogram,
    BollUpper,
    BollMiddle,
    BollLower,
    BollWidth,
    BollPercentB,
    Rsv,
    K,
    D,
    J,
    Atr,
    Obv,
    VolumeMa(usize),
}

impl IndicatorId {
    /// Stable identifier used in serialized output.
    pub fn name(&self) -> String {
        match self {
            IndicatorId::Ma(period) => format!("ma{period}"),
            IndicatorId::Ema(period) => format!("ema{period}"),
            IndicatorId::Rsi => "rsi".to_string(),
            IndicatorId::Macd => "macd".to_string(),
            IndicatorId::MacdSignal => "macd_signal".to_string(),
            IndicatorId::MacdHistogram => "macd_histogram".to_string(),
            IndicatorId::BollUpper => "boll_upper".to_string(),
            IndicatorId::BollMiddle => "boll_middle".to_string(),
            IndicatorId::BollLower => "boll_lower".to_string(),
            IndicatorId::BollWidth => "boll_width".to_string(),
            IndicatorId::BollPercentB => "boll_percent_b".to_string(),
            IndicatorId::Rsv => "rsv".to_string(),
            IndicatorId::K => "kdj_k".to_string(),
            IndicatorId::D => "kdj_d".to_string(),
            IndicatorId::J => "kdj_j".to_string(),
            IndicatorId::Atr => "atr".to_string(),
            IndicatorId::Obv => "obv".to_string(),
            IndicatorId::VolumeMa(period) => format!("vol_ma{period}"),
        }
    }

    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorId::Ma(_) | IndicatorId::Ema(_) => IndicatorCategory::Trend,
            IndicatorId::Rsi
            | IndicatorId::Macd
            | IndicatorId::MacdSignal
            | IndicatorId::MacdHistogram
            | IndicatorId::Rsv
            | IndicatorId::K
            | IndicatorId::D
            | IndicatorId::J => IndicatorCategory::Momentum,
            IndicatorId::BollUpper
            | IndicatorId::BollMiddle
            | IndicatorId::BollLower
            | IndicatorId::BollWidth
            | IndicatorId::BollPercentB
            | IndicatorId::Atr => IndicatorCategory::Volatility,
            IndicatorId::Obv | IndicatorId::VolumeMa(_) => IndicatorCategory::Volume,
        }
    }
}

impl std::fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Run every configured calculator over a validated series.
pub fn compute_bundle(series: &ValidatedSeries<'_>, config: &AnalysisConfig) -> Result<IndicatorBundle> {
    let bundle = IndicatorBundle {
        dates: series.dates().to_vec(),
        close: series.closes().to_vec(),
        ma: calculate_mas(series, &config.ma_periods)?,
        ema: calculate_emas(series, &config.ema_periods)?,
        rsi: calculate_rsi(series, config.rsi_period)?,
        macd: calculate_macd(series, config.macd.fast, config.macd.slow, config.macd.signal)?,
        bollinger: calculate_bollinger_bands(series, config.bollinger.period, config.bollinger.std_dev)?,
        kdj: calculate_kdj(series, &config.kdj)?,
        atr: calculate_atr(series, config.atr_period)?,
        obv: calculate_obv(series),
        volume_ma: calculate_volume_mas(series, &config.volume_ma_periods)?,
    };

    debug!(
        bars = bundle.len(),
        series = bundle.ids().len(),
        "Computed indicator bundle"
    );
    Ok(bundle)
}

impl IndicatorBundle {
    pub fn get(&self, id: IndicatorId) -> Option<&IndicatorSeries> {
        match id {
            IndicatorId::Ma(period) => self.ma.get(&period),
            IndicatorId::Ema(period) => self.ema.get(&period),
            IndicatorId::Rsi => Some(&self.rsi),
            IndicatorId::Macd => Some(&self.macd.macd),
            IndicatorId::MacdSignal => Some(&self.macd.signal),
            IndicatorId::MacdHistogram => Some(&self.macd.histogram),
            IndicatorId::BollUpper => Some(&self.bollinger.upper),
            IndicatorId::BollMiddle => Some(&self.bollinger.middle),
            IndicatorId::BollLower => Some(&self.bollinger.lower),
            IndicatorId::BollWidth => Some(&self.bollinger.width),
            IndicatorId::BollPercentB => Some(&self.bollinger.percent_b),
            IndicatorId::Rsv => Some(&self.kdj.rsv),
            IndicatorId::K => Some(&self.kdj.k),
            IndicatorId::D => Some(&self.kdj.d),
            IndicatorId::J => Some(&self.kdj.j),
            IndicatorId::Atr => Some(&self.atr),
            IndicatorId::Obv => Some(&self.obv),
            IndicatorId::VolumeMa(period) => self.volume_ma.get(&period),
        }
    }

    /// Every identifier present in this bundle.
    pub fn ids(&self) -> Vec<IndicatorId> {
        let fixed = [
            IndicatorId::Rsi,
            IndicatorId::Macd,
            IndicatorId::MacdSignal,
            IndicatorId::MacdHistogram,
            IndicatorId::BollUpper,
            IndicatorId::BollMiddle,
            IndicatorId::BollLower,
            IndicatorId::BollWidth,
            IndicatorId::BollPercentB,
            IndicatorId::Rsv,
            IndicatorId::K,
            IndicatorId::D,
            IndicatorId::J,
            IndicatorId::Atr,
            IndicatorId::Obv,
        ];
        self.ma
            .keys()
            .map(|&p| IndicatorId::Ma(p))
            .chain(self.ema.keys().map(|&p| IndicatorId::Ema(p)))
            .chain(fixed)
            .chain(self.volume_ma.keys().map(|&p| IndicatorId::VolumeMa(p)))
            .collect()
    }

    /// Flat name -> series view of the bundle.
    pub fn named(&self) -> BTreeMap<String, &IndicatorSeries> {
        self.ids()
            .into_iter()
            .filter_map(|id| Some((id.name(), self.get(id)?)))
            .collect()
    }
}
