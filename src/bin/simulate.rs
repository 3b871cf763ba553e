//! Mass simulation CLI.
//!
//! Run thousands of independent sessions and report how many go broke.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 runs × 1000 games, martingale
//!   cargo run --bin simulate -- -n 500 -g 5000        # 500 runs, up to 5000 games each
//!   cargo run --bin simulate -- --strategy flat --win-pct 48.6
//!   cargo run --bin simulate -- --seed 42 --json      # Reproducible run + JSON report

use anyhow::{Context, Result};
use clap::Parser;
use ruin_machine::build_info::LONG_VERSION;
use ruin_machine::cli::{init_logging, warn_outside_mass_range, warn_outside_presets, SessionArgs};
use ruin_machine::constants::{DEFAULT_GAMES_PER_RUN, DEFAULT_RUNS};
use ruin_machine::simulator::run_mass_simulation_with_progress;
use ruin_machine::utils::{default_report_filename, format_currency, write_json_report};
use ruin_machine::SimConfig;
use std::ops::ControlFlow;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Monte Carlo gambler's ruin simulation", long_version = LONG_VERSION, version)]
struct Args {
    /// Number of independent sessions
    #[arg(short = 'n', long, default_value_t = DEFAULT_RUNS)]
    runs: u32,

    /// Maximum bets per session
    #[arg(short, long, default_value_t = DEFAULT_GAMES_PER_RUN)]
    games: u32,

    #[command(flatten)]
    session: SessionArgs,

    /// RNG seed; run i uses seed + i (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Also save a JSON report
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let params = args.session.to_params();
    warn_outside_presets(&params);
    warn_outside_mass_range(args.runs, args.games);

    let config = SimConfig {
        runs: args.runs,
        games_per_run: args.games,
        params,
        seed: args.seed,
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  RUIN MACHINE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.runs);
    println!("  Games per Run:  {}", config.games_per_run);
    println!("  Strategy:       {}", config.params.strategy.label());
    println!(
        "  Bankroll:       {}",
        format_currency(config.params.starting_bankroll)
    );
    println!("  Base Bet:       {}", format_currency(config.params.base_bet));
    println!(
        "  Win Chance:     {:.1}%",
        config.params.win_probability * 100.0
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let tenth = (config.runs / 10).max(1);
    let result = run_mass_simulation_with_progress(&config, |done, total| {
        if done % tenth == 0 || done == total {
            info!(done, total, "progress");
        }
        ControlFlow::Continue(())
    })
    .context("mass simulation failed")?;

    println!("{}", result.to_text());

    if args.json {
        let filename = default_report_filename();
        write_json_report(&filename, &result)
            .with_context(|| format!("failed to write JSON report {filename}"))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
