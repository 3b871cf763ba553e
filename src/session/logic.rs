//! The single-session betting state machine.

use super::types::{GameResult, SessionParams, SessionStats, StopPolicy};
use crate::error::SimError;
use rand::Rng;
use tracing::debug;

/// One gambler's running state. Owned by exactly one driver and mutated
/// only through [`Session::place_bet`] / [`Session::resolve_bet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    params: SessionParams,
    bankroll: f64,
    current_bet: f64,
    games_played: u32,
    wins: u32,
    losses: u32,
    current_win_streak: u32,
    current_loss_streak: u32,
    longest_win_streak: u32,
    longest_loss_streak: u32,
    history: Vec<f64>,
}

impl Session {
    /// Validate `params` and open a fresh session.
    pub fn new(params: SessionParams) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self::fresh(params))
    }

    fn fresh(params: SessionParams) -> Self {
        Self {
            params,
            bankroll: params.starting_bankroll,
            current_bet: params.base_bet,
            games_played: 0,
            wins: 0,
            losses: 0,
            current_win_streak: 0,
            current_loss_streak: 0,
            longest_win_streak: 0,
            longest_loss_streak: 0,
            history: vec![params.starting_bankroll],
        }
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }

    pub fn current_bet(&self) -> f64 {
        self.current_bet
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn is_bankrupt(&self) -> bool {
        self.bankroll <= 0.0
    }

    /// True when the next bet would be refused.
    pub fn is_blocked(&self) -> bool {
        self.is_bankrupt() || self.bankroll < self.current_bet
    }

    /// Draw one outcome from `rng` and settle the bet.
    ///
    /// Returns `None` without drawing when the session is bankrupt or cannot
    /// cover the current bet.
    pub fn place_bet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<GameResult> {
        if self.is_blocked() {
            return None;
        }
        let won = rng.gen::<f64>() < self.params.win_probability;
        self.resolve_bet(won)
    }

    /// Settle the next bet with a caller-supplied outcome.
    pub fn resolve_bet(&mut self, won: bool) -> Option<GameResult> {
        if self.is_blocked() {
            return None;
        }

        let actual_bet = self.current_bet.min(self.bankroll);
        let bankroll_before = self.bankroll;
        let strategy = self.params.strategy;
        let base_bet = self.params.base_bet;

        if won {
            self.bankroll += actual_bet;
            self.wins += 1;
            self.current_win_streak += 1;
            self.current_loss_streak = 0;
            self.longest_win_streak = self.longest_win_streak.max(self.current_win_streak);
            self.current_bet = strategy.next_bet_on_win(base_bet, self.current_bet, self.bankroll);
        } else {
            self.bankroll -= actual_bet;
            self.losses += 1;
            self.current_loss_streak += 1;
            self.current_win_streak = 0;
            self.longest_loss_streak = self.longest_loss_streak.max(self.current_loss_streak);
            self.current_bet =
                strategy.next_bet_on_loss(base_bet, self.current_bet, self.bankroll);
        }

        self.games_played += 1;
        self.history.push(self.bankroll);

        if self.is_bankrupt() {
            debug!(
                games = self.games_played,
                longest_loss_streak = self.longest_loss_streak,
                "session bankrupt"
            );
        }

        Some(GameResult {
            game_number: self.games_played,
            bet: actual_bet,
            won,
            bankroll_before,
            bankroll_after: self.bankroll,
        })
    }

    pub fn stats(&self) -> SessionStats<'_> {
        let win_rate = if self.games_played > 0 {
            self.wins as f64 / self.games_played as f64 * 100.0
        } else {
            0.0
        };

        SessionStats {
            games_played: self.games_played,
            wins: self.wins,
            losses: self.losses,
            win_rate,
            current_bankroll: self.bankroll,
            starting_bankroll: self.params.starting_bankroll,
            current_bet: self.current_bet,
            longest_win_streak: self.longest_win_streak,
            longest_loss_streak: self.longest_loss_streak,
            history: &self.history,
            is_bankrupt: self.is_bankrupt(),
        }
    }

    /// Back to the state right after construction.
    pub fn reset(&mut self) {
        *self = Self::fresh(self.params);
    }

    /// Step up to `max_games` times, stopping early once the session is
    /// blocked or, under [`StopPolicy::StopOnLoss`], after the first loss.
    pub fn auto_play<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_games: u32,
        stop: StopPolicy,
    ) -> Vec<GameResult> {
        let mut results = Vec::new();
        for _ in 0..max_games {
            let Some(result) = self.place_bet(rng) else {
                break;
            };
            results.push(result);
            if stop == StopPolicy::StopOnLoss && !result.won {
                break;
            }
        }
        results
    }
}
