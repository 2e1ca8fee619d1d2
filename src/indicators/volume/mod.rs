//! Volume indicators: OBV, Volume MA

pub mod obv;
pub mod volume_ma;

pub use obv::*;
pub use volume_ma::*;
