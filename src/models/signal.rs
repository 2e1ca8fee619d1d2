//! Categorical outputs: per-indicator signals, levels and trend assessment.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiSignal {
    Oversold,
    Neutral,
    Overbought,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdSignal {
    Bullish,
    Bearish,
    /// Histogram sign and direction disagree, or the histogram is zero.
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KdjSignal {
    Overbought,
    Oversold,
    Ranging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JExtreme {
    AboveRange,
    InRange,
    BelowRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BollingerSignal {
    OverextendedUp,
    WithinBand,
    OverextendedDown,
}

/// Finer position of the close inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandZone {
    AboveBand,
    NearUpper,
    Middle,
    NearLower,
    BelowBand,
}

/// Ordering of the short, medium and long moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaAlignment {
    BullishStack,
    BearishStack,
    Mixed,
}

macro_rules! impl_label {
    ($ty:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

impl_label!(RsiSignal { Oversold => "oversold", Neutral => "neutral", Overbought => "overbought" });
impl_label!(MacdSignal { Bullish => "bullish", Bearish => "bearish", Neutral => "neutral" });
impl_label!(KdjSignal { Overbought => "overbought", Oversold => "oversold", Ranging => "ranging" });
impl_label!(JExtreme { AboveRange => "above_range", InRange => "in_range", BelowRange => "below_range" });
impl_label!(BollingerSignal {
    OverextendedUp => "overextended_up",
    WithinBand => "within_band",
    OverextendedDown => "overextended_down",
});
impl_label!(BandZone {
    AboveBand => "above_band",
    NearUpper => "near_upper",
    Middle => "middle",
    NearLower => "near_lower",
    BelowBand => "below_band",
});
impl_label!(MaAlignment {
    BullishStack => "bullish_stack",
    BearishStack => "bearish_stack",
    Mixed => "mixed",
});

/// Signals read off the last bar. Every field is defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    pub rsi: RsiSignal,
    pub macd: MacdSignal,
    pub kdj: KdjSignal,
    pub kdj_j: JExtreme,
    pub bollinger: BollingerSignal,
    pub band_zone: BandZone,
    pub ma_alignment: MaAlignment,
}

impl SignalSet {
    /// Indicator identifier to label, for report collaborators.
    pub fn labels(&self) -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            ("rsi", self.rsi.label()),
            ("macd", self.macd.label()),
            ("kdj", self.kdj.label()),
            ("kdj_j", self.kdj_j.label()),
            ("bollinger", self.bollinger.label()),
            ("bollinger_zone", self.band_zone.label()),
            ("ma_alignment", self.ma_alignment.label()),
        ])
    }
}

/// Signals for whichever indicators are past warm-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSignalSet {
    pub rsi: Option<RsiSignal>,
    pub macd: Option<MacdSignal>,
    pub kdj: Option<KdjSignal>,
    pub kdj_j: Option<JExtreme>,
    pub bollinger: Option<BollingerSignal>,
    pub band_zone: Option<BandZone>,
    pub ma_alignment: Option<MaAlignment>,
}

impl PartialSignalSet {
    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    pub fn complete(&self) -> Option<SignalSet> {
        Some(SignalSet {
            rsi: self.rsi?,
            macd: self.macd?,
            kdj: self.kdj?,
            kdj_j: self.kdj_j?,
            bollinger: self.bollinger?,
            band_zone: self.band_zone?,
            ma_alignment: self.ma_alignment?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub date: NaiveDate,
    /// Signed distance from the last close, in percent of the close
    /// (negative for support, positive for resistance).
    pub distance_pct: f64,
}

/// Support and resistance; `None` means undetermined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub support: Option<Level>,
    pub resistance: Option<Level>,
}

impl LevelSet {
    pub fn support_price(&self) -> Option<f64> {
        self.support.map(|level| level.price)
    }

    pub fn resistance_price(&self) -> Option<f64> {
        self.resistance.map(|level| level.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    StrongUp,
    WeakUp,
    Sideways,
    WeakDown,
    StrongDown,
}

impl_label!(TrendLabel {
    StrongUp => "strong_up",
    WeakUp => "weak_up",
    Sideways => "sideways",
    WeakDown => "weak_down",
    StrongDown => "strong_down",
});

/// Contribution of each input to the composite trend score, each in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendComponents {
    pub macd: f64,
    pub ma_alignment: f64,
    pub rsi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAssessment {
    pub label: TrendLabel,
    /// `|score|` clamped to [0, 1]
    pub confidence: f64,
    pub score: f64,
    pub components: TrendComponents,
}
