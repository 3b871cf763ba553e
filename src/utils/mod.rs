//! Utility modules: export and formatting.

pub mod export;
pub mod format;

pub use export::*;
pub use format::*;
