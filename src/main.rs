//! Ruin Machine - watch a bankroll drain one bet at a time.
//!
//! Usage:
//!   ruin-machine play [OPTIONS]     Auto-play one session and print every bet
//!   ruin-machine math [OPTIONS]     Expected value, ruin odds, martingale cost

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ruin_machine::analysis::{
    even_money_house_edge, expected_value, martingale_bet_after, martingale_requirement,
    ruin_probability,
};
use ruin_machine::build_info::LONG_VERSION;
use ruin_machine::cli::{init_logging, warn_outside_presets, SessionArgs};
use ruin_machine::constants::AUTO_PLAY_GAMES;
use ruin_machine::utils::{default_export_filename, export_history_csv, format_currency};
use ruin_machine::{GameResult, Session, SessionStats, StopPolicy};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ruin-machine")]
#[command(about = "Gambler's ruin simulator", long_version = LONG_VERSION, version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Auto-play a single session
    Play {
        #[command(flatten)]
        session: SessionArgs,

        /// Maximum number of bets
        #[arg(short = 'n', long, default_value_t = AUTO_PLAY_GAMES)]
        games: u32,

        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Walk away after the first lost bet
        #[arg(long)]
        stop_on_loss: bool,

        /// Export the bankroll history as CSV (default file name when no path given)
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        csv: Option<String>,

        /// Only print the final summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the math behind the ruin
    Math {
        /// Base bet in rupees
        #[arg(long, default_value_t = 100.0)]
        bet: f64,

        /// Length of the losing streak to cover
        #[arg(long, default_value_t = 10)]
        losses: u32,

        /// Win chance per bet, in percent
        #[arg(long, default_value_t = 48.6)]
        win_pct: f64,

        /// Player bankroll in betting units
        #[arg(long, default_value_t = 100.0)]
        player_units: f64,

        /// Casino bankroll in betting units
        #[arg(long, default_value_t = 10_000.0)]
        casino_units: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Play {
            session,
            games,
            seed,
            stop_on_loss,
            csv,
            quiet,
        } => play(&session, games, seed, stop_on_loss, csv, quiet),
        Commands::Math {
            bet,
            losses,
            win_pct,
            player_units,
            casino_units,
        } => {
            print_math(bet, losses, win_pct / 100.0, player_units, casino_units);
            Ok(())
        }
    }
}

fn play(
    args: &SessionArgs,
    games: u32,
    seed: Option<u64>,
    stop_on_loss: bool,
    csv: Option<String>,
    quiet: bool,
) -> Result<()> {
    let params = args.to_params();
    warn_outside_presets(&params);
    let mut session = Session::new(params).context("invalid session parameters")?;

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let stop = if stop_on_loss {
        StopPolicy::StopOnLoss
    } else {
        StopPolicy::PlayOn
    };

    info!(strategy = %params.strategy, games, "auto-play started");
    let results = session.auto_play(&mut rng, games, stop);

    if !quiet {
        for result in &results {
            print_result(result);
        }
        println!();
    }
    print_summary(&session.stats());

    if let Some(path) = csv {
        let path = if path.is_empty() {
            PathBuf::from(default_export_filename())
        } else {
            PathBuf::from(path)
        };
        export_history_csv(&path, session.history())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("History exported to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &GameResult) {
    let outcome = if result.won { "WIN " } else { "LOSS" };
    println!(
        "#{:<5} {} bet {:>10}  {:>12} -> {:>12}",
        result.game_number,
        outcome,
        format_currency(result.bet),
        format_currency(result.bankroll_before),
        format_currency(result.bankroll_after)
    );
}

fn print_summary(stats: &SessionStats<'_>) {
    println!("── SESSION ──────────────────────────────────────────────────────");
    println!(
        "  Games:        {} ({} won, {} lost, {:.1}% win rate)",
        stats.games_played, stats.wins, stats.losses, stats.win_rate
    );
    println!(
        "  Bankroll:     {} (started {}, {}{})",
        format_currency(stats.current_bankroll),
        format_currency(stats.starting_bankroll),
        if stats.profit() >= 0.0 { "+" } else { "" },
        format_currency(stats.profit())
    );
    println!("  Next Bet:     {}", format_currency(stats.current_bet));
    println!(
        "  Streaks:      longest win {}, longest loss {}",
        stats.longest_win_streak, stats.longest_loss_streak
    );
    if stats.is_bankrupt {
        println!("  💀 BANKRUPT");
    }
}

fn print_math(bet: f64, losses: u32, win_probability: f64, player: f64, casino: f64) {
    let requirement = martingale_requirement(bet, losses);
    let edge = even_money_house_edge(win_probability);

    println!("── MARTINGALE ───────────────────────────────────────────────────");
    println!(
        "  After {} straight losses at {} base:",
        losses,
        format_currency(bet)
    );
    println!(
        "  Next bet:          {}",
        format_currency(martingale_bet_after(bet, losses))
    );
    println!(
        "  Bankroll at risk:  {}",
        format_currency(requirement.total_risk)
    );
    println!(
        "  Potential profit:  {}",
        format_currency(requirement.potential_profit)
    );
    println!(
        "  Odds of the streak: 1 in {:.0}",
        (1.0 - win_probability).powi(losses as i32).recip()
    );
    println!();
    println!("── EDGE ─────────────────────────────────────────────────────────");
    println!("  Win chance:        {:.2}%", win_probability * 100.0);
    println!("  House edge:        {:.2}%", edge * 100.0);
    println!(
        "  EV per {} bet:     {:.2}",
        format_currency(bet),
        expected_value(win_probability, bet, bet)
    );
    println!(
        "  Ruin probability:  {:.4} ({} vs {} units)",
        ruin_probability(player, casino, edge),
        player,
        casino
    );
}
