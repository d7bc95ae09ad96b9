//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayOptions, play, run_play};
pub use score::{ScoreResult, score_guess};
