//! Error types for session construction and batch runs.

use thiserror::Error;

/// Errors reported synchronously by the engine to its immediate caller.
///
/// A blocked bet (bankrupt or under-funded session) is not an error; it is
/// reported as `None` from [`crate::session::Session::place_bet`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("starting bankroll must be a positive amount, got {0}")]
    InvalidBankroll(f64),

    #[error("base bet must be a positive amount, got {0}")]
    InvalidBaseBet(f64),

    #[error("win probability must be within [0, 1], got {0}")]
    InvalidWinProbability(f64),

    #[error("mass simulation needs at least one run")]
    NoRuns,

    #[error("mass simulation cancelled after {completed} of {total} runs")]
    Cancelled { completed: u32, total: u32 },

    #[error("unknown strategy '{0}' (expected martingale, flat or quit-on-loss)")]
    UnknownStrategy(String),
}
