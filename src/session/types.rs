//! Session data structures: strategy tag, construction parameters and the
//! records a session reports back to its driver.

use crate::constants::{DEFAULT_BASE_BET, DEFAULT_STARTING_BANKROLL, DEFAULT_WIN_PCT};
use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bet-sizing policy for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Double after every loss (capped by the bankroll), reset after a win.
    Martingale,
    /// Always wager the base bet.
    Flat,
    /// Sizes bets exactly like `Flat`. Stopping after a loss is left to the
    /// driver, see [`StopPolicy::StopOnLoss`].
    QuitOnLoss,
}

impl Strategy {
    pub fn all() -> [Strategy; 3] {
        [Strategy::Martingale, Strategy::Flat, Strategy::QuitOnLoss]
    }

    /// Tag used on the command line and in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Martingale => "martingale",
            Strategy::Flat => "flat",
            Strategy::QuitOnLoss => "quit-on-loss",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Martingale => "Martingale",
            Strategy::Flat => "Flat Betting",
            Strategy::QuitOnLoss => "Quit on Loss",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::all()
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| SimError::UnknownStrategy(s.to_string()))
    }
}

/// The four values a session is constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    pub starting_bankroll: f64,
    pub base_bet: f64,
    /// Probability of winning a single bet, in [0, 1].
    pub win_probability: f64,
    pub strategy: Strategy,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            starting_bankroll: DEFAULT_STARTING_BANKROLL,
            base_bet: DEFAULT_BASE_BET,
            win_probability: DEFAULT_WIN_PCT / 100.0,
            strategy: Strategy::Martingale,
        }
    }
}

impl SessionParams {
    pub fn new(
        starting_bankroll: f64,
        base_bet: f64,
        win_probability: f64,
        strategy: Strategy,
    ) -> Self {
        Self {
            starting_bankroll,
            base_bet,
            win_probability,
            strategy,
        }
    }

    /// Reject parameters outside the engine's domain. NaN never passes.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.starting_bankroll.is_finite() && self.starting_bankroll > 0.0) {
            return Err(SimError::InvalidBankroll(self.starting_bankroll));
        }
        if !(self.base_bet.is_finite() && self.base_bet > 0.0) {
            return Err(SimError::InvalidBaseBet(self.base_bet));
        }
        if !(0.0..=1.0).contains(&self.win_probability) {
            return Err(SimError::InvalidWinProbability(self.win_probability));
        }
        Ok(())
    }
}

/// Outcome of one accepted bet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameResult {
    /// 1-based index of this bet within the session.
    pub game_number: u32,
    /// Amount actually wagered.
    pub bet: f64,
    pub won: bool,
    pub bankroll_before: f64,
    pub bankroll_after: f64,
}

/// Read-only snapshot of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats<'a> {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Percentage of bets won, 0 before the first bet.
    pub win_rate: f64,
    pub current_bankroll: f64,
    pub starting_bankroll: f64,
    pub current_bet: f64,
    pub longest_win_streak: u32,
    pub longest_loss_streak: u32,
    pub history: &'a [f64],
    pub is_bankrupt: bool,
}

impl SessionStats<'_> {
    /// Net result against the starting bankroll.
    pub fn profit(&self) -> f64 {
        self.current_bankroll - self.starting_bankroll
    }
}

/// When an auto-play driver stops stepping before its game budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopPolicy {
    /// Play until the budget is spent or the session is blocked.
    #[default]
    PlayOn,
    /// Also stop right after the first lost bet.
    StopOnLoss,
}
