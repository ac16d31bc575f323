//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and the `WordSource` that validates guesses and picks targets.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{MAX_PICK_ATTEMPTS, Origin, Pick, WordSource, WordSourceError};
