//! Error types shared by validation, calculators and interpreters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Reason a single bar was rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarDefect {
    NonFinite,
    NonPositivePrice,
    NegativeVolume,
    OhlcOrdering,
    DateNotAscending,
}

impl std::fmt::Display for BarDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            BarDefect::NonFinite => "price or volume is NaN/Inf",
            BarDefect::NonPositivePrice => "price is not positive",
            BarDefect::NegativeVolume => "volume is negative",
            BarDefect::OhlcOrdering => "low <= open,close <= high violated",
            BarDefect::DateNotAscending => "date is not strictly after the previous bar",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Series shorter than the lookback the caller asked for.
    #[error("Insufficient data: need at least {required} bars, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Malformed bar at index {index} ({date}): {reason}")]
    MalformedBar {
        index: usize,
        date: NaiveDate,
        reason: BarDefect,
    },

    /// The latest value of an indicator is still inside its warm-up window.
    #[error("Indicator {indicator} is undefined at the latest bar")]
    UndefinedIndicator { indicator: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Column length mismatch: expected {expected}, got {actual}")]
    ColumnLengthMismatch { expected: usize, actual: usize },
}

impl IndicatorError {
    pub fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }

    pub fn undefined(indicator: impl Into<String>) -> Self {
        Self::UndefinedIndicator {
            indicator: indicator.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
