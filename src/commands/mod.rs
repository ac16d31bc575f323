//! Command implementations

pub mod input;
pub mod play;

pub use input::{GuessInput, InputEvent};
pub use play::{load_word_source, run_play, start_session};
