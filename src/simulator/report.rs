//! Batch result aggregation and report rendering.

use super::config::SimConfig;
use super::runner::RunOutcome;
use crate::constants::{
    HISTOGRAM_BUCKETS_PER_BANKROLL, SURVIVAL_REPORT_ROWS, SURVIVAL_SAMPLE_STEP,
};
use crate::session::SessionParams;
use crate::utils::format::format_currency;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregated results from a mass simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub runs: u32,
    pub games_per_run: u32,
    pub params: SessionParams,

    /// Terminal bankroll of every run, in run order
    pub final_bankrolls: Vec<f64>,
    pub bankruptcies: u32,
    pub survivors: u32,

    pub avg_bankroll: f64,
    pub avg_win_rate: f64,

    /// Percentage per game index, `games_per_run + 1` entries
    pub survival_curve: Vec<f64>,
}

/// One bar of the final-bankroll histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBucket {
    pub range: BucketRange,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BucketRange {
    /// Final bankroll at or below zero
    Bankrupt,
    /// Lower bound of a `[lower, lower + bucket_size)` bucket
    Band(f64),
}

impl fmt::Display for BucketRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketRange::Bankrupt => f.write_str("Bankrupt"),
            BucketRange::Band(lower) => write!(f, "₹{:.0}k", lower / 1000.0),
        }
    }
}

impl BatchResult {
    /// Fold run outcomes and per-game survival counts into a result.
    ///
    /// The survival curve keeps the historical normalization:
    /// `(runs that never went bankrupt + runs alive at game k) / runs`.
    /// It can exceed 100% and is not a strict survival fraction.
    pub fn from_runs(config: &SimConfig, runs: &[RunOutcome], survival_counts: &[u32]) -> Self {
        let num_runs = runs.len() as u32;
        let bankruptcies = runs.iter().filter(|r| r.bankrupt).count() as u32;
        let survivors = num_runs - bankruptcies;

        let final_bankrolls: Vec<f64> = runs.iter().map(|r| r.final_bankroll).collect();
        let avg_bankroll = final_bankrolls.iter().sum::<f64>() / num_runs as f64;
        let avg_win_rate = runs.iter().map(|r| r.win_rate).sum::<f64>() / num_runs as f64;

        let survival_curve = survival_counts
            .iter()
            .enumerate()
            .map(|(idx, &count)| {
                if idx == 0 {
                    100.0
                } else {
                    (survivors + count) as f64 / num_runs as f64 * 100.0
                }
            })
            .collect();

        Self {
            runs: num_runs,
            games_per_run: config.games_per_run,
            params: config.params,
            final_bankrolls,
            bankruptcies,
            survivors,
            avg_bankroll,
            avg_win_rate,
            survival_curve,
        }
    }

    pub fn bankruptcy_rate(&self) -> f64 {
        self.bankruptcies as f64 / self.runs as f64 * 100.0
    }

    pub fn median_bankroll(&self) -> f64 {
        let mut sorted = self.final_bankrolls.clone();
        sorted.sort_by(f64::total_cmp);
        sorted.get(sorted.len() / 2).copied().unwrap_or(0.0)
    }

    /// Bucket width used by the report: a fifth of the starting bankroll.
    pub fn default_bucket_size(&self) -> f64 {
        self.params.starting_bankroll / HISTOGRAM_BUCKETS_PER_BANKROLL
    }

    /// Final bankrolls grouped into `bucket_size`-wide buckets.
    ///
    /// Bankrupt runs get their own bucket, listed first; the rest follow in
    /// ascending order. Empty buckets are omitted.
    pub fn histogram(&self, bucket_size: f64) -> Vec<HistogramBucket> {
        let mut bankrupt = 0u32;
        let mut buckets: BTreeMap<i64, u32> = BTreeMap::new();

        for &bankroll in &self.final_bankrolls {
            if bankroll <= 0.0 {
                bankrupt += 1;
            } else {
                let idx = (bankroll / bucket_size).floor() as i64;
                *buckets.entry(idx).or_insert(0) += 1;
            }
        }

        let mut histogram = Vec::with_capacity(buckets.len() + 1);
        if bankrupt > 0 {
            histogram.push(HistogramBucket {
                range: BucketRange::Bankrupt,
                count: bankrupt,
            });
        }
        histogram.extend(buckets.into_iter().map(|(idx, count)| HistogramBucket {
            range: BucketRange::Band(idx as f64 * bucket_size),
            count,
        }));
        histogram
    }

    /// Every `step`-th point of the survival curve as `(game, percent)`,
    /// clamped at zero.
    pub fn survival_samples(&self, step: usize) -> Vec<(usize, f64)> {
        self.survival_curve
            .iter()
            .enumerate()
            .step_by(step.max(1))
            .map(|(game, &survival)| (game, survival.max(0.0)))
            .collect()
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  MASS SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} × up to {} games, {} at {:.1}% win chance\n",
            self.runs,
            self.games_per_run,
            self.params.strategy.label(),
            self.params.win_probability * 100.0
        ));
        report.push_str(&format!(
            "Starting bankroll {}, base bet {}\n\n",
            format_currency(self.params.starting_bankroll),
            format_currency(self.params.base_bet)
        ));

        report.push_str("── OUTCOME ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Bankrupt:         {} ({:.1}%)\n",
            self.bankruptcies,
            self.bankruptcy_rate()
        ));
        report.push_str(&format!(
            "  Survived:         {} ({:.1}%)\n",
            self.survivors,
            100.0 - self.bankruptcy_rate()
        ));
        report.push_str(&format!(
            "  Avg Bankroll:     {}\n",
            format_currency(self.avg_bankroll)
        ));
        report.push_str(&format!(
            "  Median Bankroll:  {}\n",
            format_currency(self.median_bankroll())
        ));
        report.push_str(&format!(
            "  Avg Win Rate:     {:.1}%\n\n",
            self.avg_win_rate
        ));

        report.push_str("── FINAL BANKROLL DISTRIBUTION ──────────────────────────────────\n");
        for bucket in self.histogram(self.default_bucket_size()) {
            let pct = bucket.count as f64 / self.runs as f64 * 100.0;
            let bar: String = "█".repeat((pct / 2.5) as usize);
            report.push_str(&format!(
                "  {:>9} {:>6} {}\n",
                bucket.range.to_string(),
                bucket.count,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── SURVIVAL CURVE ───────────────────────────────────────────────\n");
        let step = (self.games_per_run as usize / SURVIVAL_REPORT_ROWS).max(1);
        for (game, survival) in self.survival_samples(step) {
            let bar: String = "█".repeat((survival / 5.0) as usize);
            report.push_str(&format!("  Game {:>6}: {:>6.1}% {}\n", game, survival, bar));
        }
        report.push('\n');

        report.push_str("── VERDICT ──────────────────────────────────────────────────────\n");
        let rate = self.bankruptcy_rate();
        let verdict = if rate >= 90.0 {
            "RUINED - almost every gambler went broke"
        } else if rate >= 50.0 {
            "GRIM - most gamblers went broke"
        } else if rate > 0.0 {
            "ERODING - some went broke, the rest are bleeding"
        } else {
            "NO RUIN YET - play longer, the edge always collects"
        };
        report.push_str(&format!("  {}\n", verdict));
        if self.avg_bankroll < self.params.starting_bankroll {
            report.push_str(&format!(
                "  ⚠️  Average gambler lost {}\n",
                format_currency(self.params.starting_bankroll - self.avg_bankroll)
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Serialized with the derived rate and chart samples alongside the raw fields
impl serde::Serialize for BatchResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("BatchResult", 11)?;
        state.serialize_field("runs", &self.runs)?;
        state.serialize_field("games_per_run", &self.games_per_run)?;
        state.serialize_field("params", &self.params)?;
        state.serialize_field("final_bankrolls", &self.final_bankrolls)?;
        state.serialize_field("bankruptcies", &self.bankruptcies)?;
        state.serialize_field("survivors", &self.survivors)?;
        state.serialize_field("avg_bankroll", &self.avg_bankroll)?;
        state.serialize_field("avg_win_rate", &self.avg_win_rate)?;
        state.serialize_field("survival_curve", &self.survival_curve)?;
        state.serialize_field("bankruptcy_rate", &self.bankruptcy_rate())?;
        state.serialize_field(
            "survival_samples",
            &self.survival_samples(SURVIVAL_SAMPLE_STEP),
        )?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Strategy;

    fn outcome(final_bankroll: f64, win_rate: f64, games_played: u32) -> RunOutcome {
        RunOutcome {
            final_bankroll,
            win_rate,
            games_played,
            bankrupt: final_bankroll <= 0.0,
        }
    }

    fn sample_result() -> BatchResult {
        let config = SimConfig::new(
            4,
            4,
            SessionParams::new(1_000.0, 100.0, 0.5, Strategy::Martingale),
        );
        let runs = vec![
            outcome(0.0, 25.0, 2),
            outcome(0.0, 0.0, 4),
            outcome(1_100.0, 50.0, 4),
            outcome(450.0, 75.0, 4),
        ];
        // Games reached: run A 1-2, runs B/C/D 1-4
        let survival_counts = vec![0, 4, 4, 3, 3];
        BatchResult::from_runs(&config, &runs, &survival_counts)
    }

    #[test]
    fn test_report_generation() {
        let result = sample_result();
        assert_eq!(result.runs, 4);
        assert_eq!(result.bankruptcies, 2);
        assert_eq!(result.survivors, 2);
        assert_eq!(result.avg_bankroll, 387.5);
        assert_eq!(result.avg_win_rate, 37.5);
        assert_eq!(result.bankruptcy_rate(), 50.0);
    }

    #[test]
    fn test_survival_curve_keeps_historical_formula() {
        let result = sample_result();
        // (2 survivors + count) / 4 * 100
        assert_eq!(result.survival_curve, vec![100.0, 150.0, 150.0, 125.0, 125.0]);
    }

    #[test]
    fn test_histogram_bankrupt_first_then_ascending() {
        let result = sample_result();
        let histogram = result.histogram(result.default_bucket_size());
        assert_eq!(
            histogram,
            vec![
                HistogramBucket {
                    range: BucketRange::Bankrupt,
                    count: 2
                },
                HistogramBucket {
                    range: BucketRange::Band(400.0),
                    count: 1
                },
                HistogramBucket {
                    range: BucketRange::Band(1_000.0),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(BucketRange::Bankrupt.to_string(), "Bankrupt");
        assert_eq!(BucketRange::Band(12_000.0).to_string(), "₹12k");
    }

    #[test]
    fn test_survival_samples_step() {
        let result = sample_result();
        assert_eq!(
            result.survival_samples(2),
            vec![(0, 100.0), (2, 150.0), (4, 125.0)]
        );
        // Step 0 behaves like step 1
        assert_eq!(result.survival_samples(0).len(), 5);
    }

    #[test]
    fn test_median_bankroll() {
        assert_eq!(sample_result().median_bankroll(), 450.0);
    }

    #[test]
    fn test_text_report_sections() {
        let text = sample_result().to_text();
        assert!(text.contains("MASS SIMULATION REPORT"));
        assert!(text.contains("Bankrupt:         2 (50.0%)"));
        assert!(text.contains("Martingale"));
        assert!(text.contains("GRIM"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&sample_result().to_json()).unwrap();
        assert_eq!(json["bankruptcies"], 2);
        assert_eq!(json["params"]["strategy"], "martingale");
        assert_eq!(json["bankruptcy_rate"], 50.0);
        assert_eq!(json["survival_curve"].as_array().unwrap().len(), 5);
    }
}
