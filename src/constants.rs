// Session defaults (what the simulator starts with before the player touches anything)
pub const DEFAULT_STARTING_BANKROLL: f64 = 10_000.0;
pub const DEFAULT_BASE_BET: f64 = 100.0;
pub const DEFAULT_WIN_PCT: f64 = 50.0;

// Presentation ranges. Drivers warn outside these; the engine accepts any valid value.
pub const BANKROLL_RANGE: (f64, f64) = (1_000.0, 100_000.0);
pub const BASE_BET_RANGE: (f64, f64) = (10.0, 5_000.0);
pub const WIN_PCT_RANGE: (f64, f64) = (45.0, 50.0);

// Auto-play
pub const AUTO_PLAY_GAMES: u32 = 100;

// Mass simulation
pub const DEFAULT_RUNS: u32 = 1_000;
pub const DEFAULT_GAMES_PER_RUN: u32 = 1_000;
pub const MASS_RANGE: (u32, u32) = (100, 10_000);

// Report rendering
pub const HISTOGRAM_BUCKETS_PER_BANKROLL: f64 = 5.0;
pub const SURVIVAL_SAMPLE_STEP: usize = 10;
pub const SURVIVAL_REPORT_ROWS: usize = 10;

// Export
pub const CSV_HEADER: &str = "Game,Bankroll";
pub const EXPORT_FILE_PREFIX: &str = "ruin-machine";

/// Whether `value` lies within the inclusive presentation range.
pub fn in_range(value: f64, range: (f64, f64)) -> bool {
    value >= range.0 && value <= range.1
}
