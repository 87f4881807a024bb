// Sweep Simulator Module

pub mod config;
pub mod runner;
pub mod stats;

// Re-export commonly used types
pub use config::{FixedParams, OutputConfig, SweepScenarioConfig, SweepSpec};
pub use runner::SweepRunner;
pub use stats::SweepOutcome;
