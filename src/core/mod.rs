//! Orchestration helpers around the pure analysis engine

pub mod batch;

pub use batch::*;
