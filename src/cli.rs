//! Pieces shared by the `ruin-machine` and `simulate` binaries.

use crate::constants::{
    in_range, BANKROLL_RANGE, BASE_BET_RANGE, DEFAULT_BASE_BET, DEFAULT_STARTING_BANKROLL,
    DEFAULT_WIN_PCT, MASS_RANGE, WIN_PCT_RANGE,
};
use crate::session::{SessionParams, Strategy};
use clap::Args;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

/// Session parameters as they appear on the command line.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Starting bankroll in rupees
    #[arg(long, default_value_t = DEFAULT_STARTING_BANKROLL)]
    pub bankroll: f64,

    /// Base bet in rupees
    #[arg(long, default_value_t = DEFAULT_BASE_BET)]
    pub bet: f64,

    /// Win chance per bet, in percent
    #[arg(long, default_value_t = DEFAULT_WIN_PCT)]
    pub win_pct: f64,

    /// Bet sizing: martingale, flat or quit-on-loss
    #[arg(long, default_value_t = Strategy::Martingale)]
    pub strategy: Strategy,
}

impl SessionArgs {
    pub fn to_params(&self) -> SessionParams {
        SessionParams::new(self.bankroll, self.bet, self.win_pct / 100.0, self.strategy)
    }
}

/// Install the fmt subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Warn about values the web UI would never have allowed. Returns how many
/// values were flagged.
pub fn warn_outside_presets(params: &SessionParams) -> usize {
    let mut flagged = 0;
    if !in_range(params.starting_bankroll, BANKROLL_RANGE) {
        warn!(
            bankroll = params.starting_bankroll,
            "bankroll outside the usual {}-{} range", BANKROLL_RANGE.0, BANKROLL_RANGE.1
        );
        flagged += 1;
    }
    if !in_range(params.base_bet, BASE_BET_RANGE) {
        warn!(
            bet = params.base_bet,
            "base bet outside the usual {}-{} range", BASE_BET_RANGE.0, BASE_BET_RANGE.1
        );
        flagged += 1;
    }
    let win_pct = params.win_probability * 100.0;
    if !in_range(win_pct, WIN_PCT_RANGE) {
        warn!(
            win_pct,
            "win chance outside the usual {}-{}% range", WIN_PCT_RANGE.0, WIN_PCT_RANGE.1
        );
        flagged += 1;
    }
    flagged
}

/// Warn when a batch size is outside the usual 100-10,000 range.
pub fn warn_outside_mass_range(runs: u32, games_per_run: u32) -> usize {
    let outside = |v: u32| v < MASS_RANGE.0 || v > MASS_RANGE.1;
    let mut flagged = 0;
    if outside(runs) {
        warn!(runs, "run count outside the usual {}-{} range", MASS_RANGE.0, MASS_RANGE.1);
        flagged += 1;
    }
    if outside(games_per_run) {
        warn!(
            games_per_run,
            "games per run outside the usual {}-{} range", MASS_RANGE.0, MASS_RANGE.1
        );
        flagged += 1;
    }
    flagged
}
