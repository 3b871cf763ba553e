//! Ruin Machine - gambler's ruin simulator library
//!
//! Exposes the betting engine, the mass simulation runner and their
//! supporting pieces for the binaries and for testing.

pub mod analysis;
pub mod build_info;
pub mod cli;
pub mod constants;
pub mod error;
pub mod session;
pub mod simulator;
pub mod utils;

pub use error::SimError;
pub use session::{GameResult, Session, SessionParams, SessionStats, StopPolicy, Strategy};
pub use simulator::{run_mass_simulation, BatchResult, SimConfig};
