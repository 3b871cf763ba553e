//! Simulation configuration.

use crate::constants::{DEFAULT_GAMES_PER_RUN, DEFAULT_RUNS};
use crate::error::SimError;
use crate::session::{SessionParams, Strategy};

/// Configuration for a mass simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of independent sessions to play
    pub runs: u32,

    /// Maximum bets per session before it is stopped
    pub games_per_run: u32,

    /// Parameters every session is opened with
    pub params: SessionParams,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            games_per_run: DEFAULT_GAMES_PER_RUN,
            params: SessionParams::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn new(runs: u32, games_per_run: u32, params: SessionParams) -> Self {
        Self {
            runs,
            games_per_run,
            params,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Small seeded batch for smoke tests
    pub fn quick(strategy: Strategy) -> Self {
        Self {
            runs: 100,
            games_per_run: 200,
            params: SessionParams {
                strategy,
                ..SessionParams::default()
            },
            seed: Some(42),
        }
    }

    /// Roulette-style even-money game (18/37 win chance) with default stakes
    pub fn house_edge_demo(strategy: Strategy) -> Self {
        Self {
            params: SessionParams {
                win_probability: 18.0 / 37.0,
                strategy,
                ..SessionParams::default()
            },
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.runs == 0 {
            return Err(SimError::NoRuns);
        }
        self.params.validate()
    }
}
