// Sweep Simulator Configuration

use blackout_sim::{SimParams, SweepParam};

// ============================================================================
// Main Configuration
// ============================================================================

/// Main configuration for a sweep scenario run
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SweepScenarioConfig {
    /// Monte-Carlo iterations per sweep point
    pub iterations: usize,

    /// Parameters held fixed while one of them is swept
    pub fixed: FixedParams,

    /// Sweeps to run, in file order
    pub sweeps: Vec<SweepSpec>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// The four trial parameters; the swept one is overridden per point
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct FixedParams {
    pub clusters: usize,
    pub nodes: usize,
    #[serde(default)]
    pub seeders: usize,
    #[serde(default)]
    pub blackouts: usize,
}

impl FixedParams {
    pub fn to_sim_params(self) -> SimParams {
        SimParams {
            clusters: self.clusters,
            nodes: self.nodes,
            seeders: self.seeders,
            blackouts: self.blackouts,
        }
    }
}

// ============================================================================
// Sweep Specification
// ============================================================================

/// One parameter sweep: vary `param` from `from` to `to` inclusive
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SweepSpec {
    /// Which parameter to vary
    pub param: SweepParam,

    /// First swept value (inclusive)
    pub from: usize,

    /// Last swept value (inclusive)
    pub to: usize,

    /// Chart title handed to the plotting consumer
    #[serde(default)]
    pub title: Option<String>,
}

impl SweepSpec {
    /// Title for summaries and CSV headers; falls back to "received vs param"
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Received vs {}", self.param.label()))
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output and logging
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OutputConfig {
    /// Directory for per-sweep CSV files (one file per sweep)
    #[serde(default)]
    pub csv_dir: Option<String>,

    /// Print every sweep point, not just the summary
    #[serde(default)]
    pub verbose: bool,
}
