//! Mass simulation runner.
//!
//! Plays many independent sessions with identical parameters and folds
//! their terminal states into a [`BatchResult`].

use super::config::SimConfig;
use super::report::BatchResult;
use crate::error::SimError;
use crate::session::{Session, SessionParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Terminal state of one batch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome {
    pub final_bankroll: f64,
    pub win_rate: f64,
    pub games_played: u32,
    pub bankrupt: bool,
}

/// Run the full batch and return the aggregated result.
pub fn run_mass_simulation(config: &SimConfig) -> Result<BatchResult, SimError> {
    run_mass_simulation_with_progress(config, |_, _| ControlFlow::Continue(()))
}

/// Like [`run_mass_simulation`], calling `on_run(completed, total)` after
/// every run. Returning `ControlFlow::Break` stops the batch before the next
/// run starts and yields [`SimError::Cancelled`].
pub fn run_mass_simulation_with_progress<F>(
    config: &SimConfig,
    mut on_run: F,
) -> Result<BatchResult, SimError>
where
    F: FnMut(u32, u32) -> ControlFlow<()>,
{
    config.validate()?;

    info!(
        runs = config.runs,
        games_per_run = config.games_per_run,
        strategy = %config.params.strategy,
        win_probability = config.params.win_probability,
        "starting mass simulation"
    );

    let mut survival_counts = vec![0u32; config.games_per_run as usize + 1];
    let mut outcomes = Vec::with_capacity(config.runs as usize);

    for run_idx in 0..config.runs {
        // Each run draws from its own stream
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let outcome = simulate_single_run(
            &config.params,
            config.games_per_run,
            &mut rng,
            &mut survival_counts,
        )?;
        debug!(
            run = run_idx + 1,
            games = outcome.games_played,
            final_bankroll = outcome.final_bankroll,
            bankrupt = outcome.bankrupt,
            "run finished"
        );
        outcomes.push(outcome);

        let completed = run_idx + 1;
        if on_run(completed, config.runs).is_break() && completed < config.runs {
            info!(completed, total = config.runs, "mass simulation cancelled");
            return Err(SimError::Cancelled {
                completed,
                total: config.runs,
            });
        }
    }

    let result = BatchResult::from_runs(config, &outcomes, &survival_counts);
    info!(
        bankruptcies = result.bankruptcies,
        survivors = result.survivors,
        avg_bankroll = result.avg_bankroll,
        "mass simulation finished"
    );
    Ok(result)
}

/// Play one session until it goes bankrupt or hits the game cap.
///
/// `survival_counts[k]` is bumped for every game index `k` the run reaches.
/// A session that is blocked without being bankrupt keeps counting until
/// the cap, since only bankruptcy ends the loop.
fn simulate_single_run(
    params: &SessionParams,
    games_per_run: u32,
    rng: &mut ChaCha8Rng,
    survival_counts: &mut [u32],
) -> Result<RunOutcome, SimError> {
    let mut session = Session::new(*params)?;
    let mut game_count: u32 = 0;

    while game_count < games_per_run && !session.is_bankrupt() {
        session.place_bet(rng);
        game_count += 1;
        survival_counts[game_count as usize] += 1;
    }

    let stats = session.stats();
    Ok(RunOutcome {
        final_bankroll: stats.current_bankroll,
        win_rate: stats.win_rate,
        games_played: stats.games_played,
        bankrupt: stats.is_bankrupt,
    })
}
