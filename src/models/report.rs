use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorBundle;
use crate::models::signal::{LevelSet, SignalSet, TrendAssessment};

/// Raw values at the last bar, for narrative-report collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestValues {
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_histogram: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub j: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_b: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obv: Option<f64>,
    /// Latest volume divided by its shortest volume moving average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ratio: Option<f64>,
}

/// Full result of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReport {
    pub indicators: IndicatorBundle,
    pub latest: LatestValues,
    pub signals: SignalSet,
    pub levels: LevelSet,
    pub trend: TrendAssessment,
}

impl TechnicalReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
