//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod clue;
mod letters;
mod word;

pub use clue::{Clue, evaluate};
pub use letters::{ALPHABET_LEN, LetterBoard, LetterStatus, TriedLetters, alphabet};
pub use word::{Word, WordError};
