//! Full-screen TUI game

mod app;
mod rendering;

pub use app::{App, run_tui};
