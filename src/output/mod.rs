//! Terminal output formatting
//!
//! Display utilities for clue lines, game messages and command results.

pub mod display;
pub mod formatters;

pub use display::{write_banner, write_score_result};
pub use formatters::{failure_message, render_clues, success_message};
