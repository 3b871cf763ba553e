//! Single-session betting engine.
//!
//! A [`Session`] models one gambler betting repeatedly against a fixed win
//! probability. Drivers step it one bet at a time with [`Session::place_bet`]
//! and read [`Session::stats`] for display. Bet sizing after each outcome is
//! decided by the session's [`Strategy`].

mod logic;
mod strategy;
mod types;

pub use logic::Session;
pub use strategy::BetRule;
pub use types::{GameResult, SessionParams, SessionStats, StopPolicy, Strategy};
