//! Techscan: technical-indicator computation for daily price histories.
//!
//! Turns an ordered daily OHLCV series for one instrument into aligned
//! indicator series, categorical signals, support/resistance levels and a
//! trend-strength assessment. Every entry point is a pure function of the
//! series it is handed.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use config::AnalysisConfig;
pub use indicators::error::{BarDefect, IndicatorError, Result};
pub use models::{PriceBar, PriceSeries, TechnicalReport};
pub use signals::engine::AnalysisEngine;
