//! Signal interpretation and trend scoring over computed indicators.

pub mod engine;
pub mod interpreter;
pub mod scoring;

pub use engine::AnalysisEngine;
pub use interpreter::SignalInterpreter;
pub use scoring::*;
