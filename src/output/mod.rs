//! Terminal output formatting
//!
//! Display utilities for the play mode.

pub mod formatters;

pub use formatters::{feedback_tiles, feedback_to_emoji};
