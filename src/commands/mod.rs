//! Command implementations

pub mod play;

pub use play::{PlayOutcome, run_play};
