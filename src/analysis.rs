//! Closed-form companions to the simulation: what the dice say before a
//! single bet is placed.

use serde::Serialize;

/// Expected profit of one bet paying `win_amount` with probability
/// `win_prob` and costing `loss_amount` otherwise.
pub fn expected_value(win_prob: f64, win_amount: f64, loss_amount: f64) -> f64 {
    win_prob * win_amount - (1.0 - win_prob) * loss_amount
}

/// House edge of an even-money bet: `1 - 2p`.
pub fn even_money_house_edge(win_probability: f64) -> f64 {
    1.0 - 2.0 * win_probability
}

/// Probability that a player with `player_bankroll` units is ruined before
/// breaking a casino holding `casino_bankroll` units, betting one unit at a
/// time against `house_edge`.
pub fn ruin_probability(player_bankroll: f64, casino_bankroll: f64, house_edge: f64) -> f64 {
    if house_edge == 0.0 {
        return casino_bankroll / (player_bankroll + casino_bankroll);
    }
    let q = (1.0 + house_edge) / (1.0 - house_edge);
    let n = player_bankroll;
    let m = casino_bankroll;
    (q.powf(n) - 1.0) / (q.powf(n + m) - 1.0)
}

/// Cost of surviving a losing streak with a doubling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MartingaleRequirement {
    /// Bankroll needed to cover every bet of the streak
    pub required_bankroll: f64,
    pub total_risk: f64,
    /// What winning the next bet nets you
    pub potential_profit: f64,
}

pub fn martingale_requirement(base_bet: f64, consecutive_losses: u32) -> MartingaleRequirement {
    let required_bankroll = base_bet * (2f64.powi(consecutive_losses as i32) - 1.0);
    MartingaleRequirement {
        required_bankroll,
        total_risk: required_bankroll,
        potential_profit: base_bet,
    }
}

/// Size of the bet placed after `consecutive_losses` straight losses.
pub fn martingale_bet_after(base_bet: f64, consecutive_losses: u32) -> f64 {
    base_bet * 2f64.powi(consecutive_losses as i32)
}
