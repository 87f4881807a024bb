// Sweep Simulator Runner

use blackout_sim::{sweep, ModelKind};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SweepScenarioConfig;
use super::stats::SweepOutcome;

/// Runs every sweep in a scenario for both delivery models
pub struct SweepRunner {
    config: SweepScenarioConfig,
    rng: StdRng,
    seed_used: [u8; 32],
}

impl SweepRunner {
    /// Create a new runner; a missing seed is drawn from the OS
    pub fn new(config: SweepScenarioConfig, seed: Option<[u8; 32]>) -> Self {
        let seed_used = seed.unwrap_or_else(|| {
            let mut seed = [0u8; 32];
            rand::thread_rng().fill(&mut seed);
            seed
        });

        Self {
            config,
            rng: StdRng::from_seed(seed_used),
            seed_used,
        }
    }

    pub fn seed_used(&self) -> [u8; 32] {
        self.seed_used
    }

    /// Run all sweeps in file order, both models per sweep.
    ///
    /// The P2P and server series observe independent draws; the models are
    /// compared through their means, not through shared randomness.
    pub fn run(mut self) -> Vec<SweepOutcome> {
        let base = self.config.fixed.to_sim_params();
        let iterations = self.config.iterations;

        let mut outcomes = Vec::new();
        for spec in &self.config.sweeps {
            debug!(
                "sweeping {} from {} to {} at {} iterations",
                spec.param.label(),
                spec.from,
                spec.to,
                iterations
            );

            let range = spec.from..=spec.to;
            let p2p = sweep(
                ModelKind::P2p,
                &base,
                spec.param,
                range.clone(),
                iterations,
                &mut self.rng,
            );
            let server = sweep(
                ModelKind::Server,
                &base,
                spec.param,
                range,
                iterations,
                &mut self.rng,
            );

            outcomes.push(SweepOutcome {
                title: spec.display_title(),
                param: spec.param,
                iterations,
                p2p,
                server,
            });
        }

        outcomes
    }
}
