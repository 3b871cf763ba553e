//! Bet-sizing transition table.
//!
//! Each strategy maps to a pair of rules: one applied after a win, one after
//! a loss. Adding a strategy means adding a row to [`Strategy::rules`].

use super::types::Strategy;

/// How the next bet is derived after an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetRule {
    /// Go back to the base bet.
    ResetToBase,
    /// Double the previous bet, capped at the bankroll left after the outcome.
    DoubleCapped,
}

impl BetRule {
    pub fn apply(self, base_bet: f64, current_bet: f64, bankroll: f64) -> f64 {
        match self {
            BetRule::ResetToBase => base_bet,
            BetRule::DoubleCapped => (current_bet * 2.0).min(bankroll),
        }
    }
}

impl Strategy {
    /// `(on_win, on_loss)` rules for this strategy.
    pub fn rules(&self) -> (BetRule, BetRule) {
        match self {
            Strategy::Martingale => (BetRule::ResetToBase, BetRule::DoubleCapped),
            Strategy::Flat => (BetRule::ResetToBase, BetRule::ResetToBase),
            Strategy::QuitOnLoss => (BetRule::ResetToBase, BetRule::ResetToBase),
        }
    }

    pub fn next_bet_on_win(&self, base_bet: f64, current_bet: f64, bankroll: f64) -> f64 {
        self.rules().0.apply(base_bet, current_bet, bankroll)
    }

    pub fn next_bet_on_loss(&self, base_bet: f64, current_bet: f64, bankroll: f64) -> f64 {
        self.rules().1.apply(base_bet, current_bet, bankroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_strategy_resets_on_win() {
        for strategy in Strategy::all() {
            assert_eq!(strategy.next_bet_on_win(100.0, 800.0, 5_000.0), 100.0);
        }
    }

    #[test]
    fn test_martingale_doubles_on_loss() {
        let next = Strategy::Martingale.next_bet_on_loss(100.0, 400.0, 5_000.0);
        assert_eq!(next, 800.0);
    }

    #[test]
    fn test_martingale_double_capped_by_bankroll() {
        let next = Strategy::Martingale.next_bet_on_loss(100.0, 400.0, 300.0);
        assert_eq!(next, 300.0);
    }

    #[test]
    fn test_quit_on_loss_sizes_like_flat() {
        assert_eq!(Strategy::QuitOnLoss.rules(), Strategy::Flat.rules());
        assert_eq!(
            Strategy::QuitOnLoss.next_bet_on_loss(100.0, 100.0, 50.0),
            100.0
        );
    }
}
