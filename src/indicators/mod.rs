pub mod error;
pub mod registry;
pub mod validation;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use error::{BarDefect, IndicatorError};
pub use registry::*;
pub use validation::*;

pub(crate) fn require_period(name: &str, period: usize) -> error::Result<()> {
    if period == 0 {
        return Err(IndicatorError::invalid_parameter(format!(
            "{name} period must be > 0"
        )));
    }
    Ok(())
}
