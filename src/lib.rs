//! Pica Centro
//!
//! A Mastermind-style digit guessing game. Guess the secret number; each
//! guess is answered with one clue per digit:
//! `C` (centro, right place), `P` (pica, wrong place) or `X` (absent).
//!
//! # Quick Start
//!
//! ```rust
//! use pica_centro::core::{Guess, Secret, score};
//!
//! let secret: Secret = "0443".parse().unwrap();
//! let guess: Guess = "4034".parse().unwrap();
//!
//! let (clues, solved) = score(&guess, &secret);
//! assert_eq!(clues.to_string(), "PPPP");
//! assert!(!solved);
//! ```

// Core domain types
pub mod core;

// Game settings
pub mod config;

// Game state machine
pub mod game;

// Keystroke guess entry
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
