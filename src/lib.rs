//! Multi-Wordle
//!
//! Play several Wordle games at once, each with its own secret word, driven
//! by a single stream of guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use multi_wordle::core::Word;
//! use multi_wordle::game::{EndReason, Session, SessionState};
//!
//! let targets = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
//! let mut session = Session::new(targets, 6).unwrap();
//!
//! session.submit_guess(&Word::new("slate").unwrap()).unwrap();
//! let state = session.submit_guess(&Word::new("crane").unwrap()).unwrap();
//!
//! assert_eq!(state, SessionState::Ended(EndReason::AllComplete));
//! assert_eq!(session.summary().score_line(), "[2:1]");
//! ```

// Core domain types
pub mod core;

// Per-game state and the multi-game session
pub mod game;

// Grid widths, headings and row arrangement
pub mod layout;

// Configuration file, environment and command-line overrides
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
