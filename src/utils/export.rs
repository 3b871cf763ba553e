//! Session history and report export.
//!
//! The CSV layout (`Game,Bankroll` header, one `index,bankroll` row per
//! history entry starting at index 0) is the only persisted data format.

use crate::constants::{CSV_HEADER, EXPORT_FILE_PREFIX};
use crate::simulator::BatchResult;
use std::fs;
use std::io;
use std::path::Path;

/// Render a bankroll history as CSV text. Rows are `\n`-separated with no
/// trailing newline; values use their shortest exact form (`10000`, not
/// `10000.0`).
pub fn history_to_csv(history: &[f64]) -> String {
    let mut lines = Vec::with_capacity(history.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(
        history
            .iter()
            .enumerate()
            .map(|(game, bankroll)| format!("{game},{bankroll}")),
    );
    lines.join("\n")
}

/// Write a bankroll history CSV to `path`.
pub fn export_history_csv(path: impl AsRef<Path>, history: &[f64]) -> io::Result<()> {
    fs::write(path, history_to_csv(history))
}

/// `ruin-machine-<unix millis>.csv`
pub fn default_export_filename() -> String {
    format!(
        "{}-{}.csv",
        EXPORT_FILE_PREFIX,
        chrono::Utc::now().timestamp_millis()
    )
}

/// `sim_report_YYYYMMDD_HHMMSS.json`
pub fn default_report_filename() -> String {
    format!(
        "sim_report_{}.json",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    )
}

/// Write the pretty JSON form of a batch result to `path`.
pub fn write_json_report(path: impl AsRef<Path>, result: &BatchResult) -> io::Result<()> {
    fs::write(path, result.to_json())
}
