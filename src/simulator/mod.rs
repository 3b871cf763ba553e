//! Mass simulation for Monte Carlo analysis of gambler's ruin.
//!
//! Run thousands of independent sessions with the same parameters to see:
//! - How many gamblers go bankrupt within a game budget
//! - How final bankrolls are distributed
//! - How quickly the population dies off (survival curve)
//!
//! Every run plays through the same [`crate::session::Session`] engine that
//! drives a single interactive session.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{BatchResult, BucketRange, HistogramBucket};
pub use runner::{run_mass_simulation, run_mass_simulation_with_progress, RunOutcome};
