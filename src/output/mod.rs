//! Terminal output formatting
//!
//! Grid rows, prompts and messages for the text interface.

pub mod board;
pub mod display;
pub mod formatters;

pub use board::Board;
pub use display::{end_text, help_text, score_text, words_text};
