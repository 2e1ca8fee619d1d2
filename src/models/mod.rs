//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod report;
pub mod signal;

pub use bar::{PriceBar, PriceSeries};
pub use indicators::{BollingerSeries, IndicatorBundle, IndicatorSeries, KdjSeries, MacdSeries};
pub use report::{LatestValues, TechnicalReport};
pub use signal::{
    BandZone, BollingerSignal, JExtreme, KdjSignal, Level, LevelSet, MaAlignment, MacdSignal,
    PartialSignalSet, RsiSignal, SignalSet, TrendAssessment, TrendComponents, TrendLabel,
};
