//! Integration test: session engine behavior through the public API
//!
//! Scripted outcomes go through `resolve_bet`, random ones through seeded
//! ChaCha streams.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ruin_machine::{Session, SessionParams, StopPolicy, Strategy};

fn open(bankroll: f64, bet: f64, p: f64, strategy: Strategy) -> Session {
    Session::new(SessionParams::new(bankroll, bet, p, strategy)).unwrap()
}

/// Invariants that must hold after every step of any session
fn assert_invariants(session: &Session) {
    let stats = session.stats();
    assert_eq!(stats.current_bankroll, *stats.history.last().unwrap());
    assert_eq!(stats.history.len(), stats.games_played as usize + 1);
    assert_eq!(stats.wins + stats.losses, stats.games_played);
    assert_eq!(stats.is_bankrupt, stats.current_bankroll <= 0.0);
    if stats.games_played == 0 {
        assert_eq!(stats.win_rate, 0.0);
    } else {
        assert_eq!(
            stats.win_rate,
            stats.wins as f64 / stats.games_played as f64 * 100.0
        );
    }
}

#[test]
fn test_scripted_martingale_sequence() {
    let mut session = open(10_000.0, 100.0, 0.5, Strategy::Martingale);

    let mut bets = Vec::new();
    for won in [true, true, false, false, false] {
        let result = session.resolve_bet(won).unwrap();
        bets.push(result.bet);
        assert_invariants(&session);
    }

    assert_eq!(bets, vec![100.0, 100.0, 100.0, 200.0, 400.0]);
    assert_eq!(
        session.history(),
        &[10_000.0, 10_100.0, 10_200.0, 10_100.0, 9_900.0, 9_500.0]
    );
    assert_eq!(session.current_bet(), 800.0);
}

#[test]
fn test_martingale_all_losses_to_bankruptcy() {
    let mut session = open(1_000.0, 100.0, 0.5, Strategy::Martingale);

    let bets: Vec<f64> = (0..3)
        .map(|_| session.resolve_bet(false).unwrap().bet)
        .collect();
    assert_eq!(bets, vec![100.0, 200.0, 400.0]);
    assert_eq!(session.bankroll(), 300.0);
    // min(800, 300)
    assert_eq!(session.current_bet(), 300.0);

    let last = session.resolve_bet(false).unwrap();
    assert_eq!(last.bet, 300.0);
    assert_eq!(last.bankroll_after, 0.0);
    assert!(session.is_bankrupt());
    assert_invariants(&session);

    let frozen = session.clone();
    for won in [true, false, true] {
        assert!(session.resolve_bet(won).is_none());
    }
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    assert!(session.place_bet(&mut rng).is_none());
    assert_eq!(session, frozen);
}

#[test]
fn test_martingale_bet_after_loss_streak() {
    for streak in 0..6u32 {
        let mut session = open(100_000.0, 50.0, 0.5, Strategy::Martingale);
        for _ in 0..streak {
            session.resolve_bet(false);
        }
        let expected = (50.0 * 2f64.powi(streak as i32)).min(session.bankroll());
        assert_eq!(session.current_bet(), expected);

        session.resolve_bet(true);
        assert_eq!(session.current_bet(), 50.0);
    }
}

#[test]
fn test_flat_and_quit_on_loss_keep_base_bet() {
    for strategy in [Strategy::Flat, Strategy::QuitOnLoss] {
        let mut session = open(10_000.0, 250.0, 0.47, strategy);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..30 {
            if session.place_bet(&mut rng).is_none() {
                break;
            }
            assert_eq!(session.current_bet(), 250.0);
            assert_invariants(&session);
        }
    }
}

#[test]
fn test_quit_on_loss_does_not_stop_on_its_own() {
    let mut session = open(10_000.0, 100.0, 0.0, Strategy::QuitOnLoss);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let results = session.auto_play(&mut rng, 5, StopPolicy::PlayOn);
    assert_eq!(results.len(), 5);

    session.reset();
    let results = session.auto_play(&mut rng, 5, StopPolicy::StopOnLoss);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_flat_always_win() {
    let n = 40;
    let mut session = open(5_000.0, 125.0, 1.0, Strategy::Flat);
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    for _ in 0..n {
        assert!(session.place_bet(&mut rng).unwrap().won);
    }

    let stats = session.stats();
    assert_eq!(stats.current_bankroll, 5_000.0 + n as f64 * 125.0);
    assert_eq!(stats.longest_win_streak, n);
    assert_eq!(stats.longest_loss_streak, 0);
    assert_eq!(stats.win_rate, 100.0);
}

#[test]
fn test_longest_streaks_track_running_maximum() {
    let mut session = open(100_000.0, 10.0, 0.5, Strategy::Flat);
    let mut rng = ChaCha8Rng::seed_from_u64(31337);

    let (mut win_run, mut loss_run) = (0u32, 0u32);
    let (mut best_win, mut best_loss) = (0u32, 0u32);
    let (mut prev_win, mut prev_loss) = (0u32, 0u32);

    for _ in 0..500 {
        let result = session.place_bet(&mut rng).unwrap();
        if result.won {
            win_run += 1;
            loss_run = 0;
        } else {
            loss_run += 1;
            win_run = 0;
        }
        best_win = best_win.max(win_run);
        best_loss = best_loss.max(loss_run);

        let stats = session.stats();
        assert_eq!(stats.longest_win_streak, best_win);
        assert_eq!(stats.longest_loss_streak, best_loss);
        assert!(stats.longest_win_streak >= prev_win);
        assert!(stats.longest_loss_streak >= prev_loss);
        prev_win = stats.longest_win_streak;
        prev_loss = stats.longest_loss_streak;
    }
}

#[test]
fn test_bankroll_moves_by_exact_wager() {
    let mut session = open(10_000.0, 100.0, 0.49, Strategy::Martingale);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    while let Some(result) = session.place_bet(&mut rng) {
        let delta = if result.won { result.bet } else { -result.bet };
        assert_eq!(result.bankroll_after, result.bankroll_before + delta);
        assert!(result.bankroll_after >= 0.0);
        assert_invariants(&session);
        if session.stats().games_played >= 2_000 {
            break;
        }
    }
}

#[test]
fn test_reset_matches_fresh_session() {
    let params = SessionParams::new(2_000.0, 100.0, 0.45, Strategy::Martingale);
    let mut session = Session::new(params).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    session.auto_play(&mut rng, 50, StopPolicy::PlayOn);

    session.reset();
    assert_eq!(session, Session::new(params).unwrap());
    assert_invariants(&session);
}
