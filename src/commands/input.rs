//! Reading guesses and commands from the player

use crate::core::Word;
use crate::wordlists::WordSource;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A word from the word list
    Guess(Word),
    /// `:q`, or end of input
    Quit,
    /// `:s`, only when revealing is allowed
    Reveal,
}

/// Line reader that only yields acceptable input
pub struct GuessInput<'a, R> {
    reader: R,
    words: &'a WordSource,
    allow_reveal: bool,
}

impl<'a, R: BufRead> GuessInput<'a, R> {
    pub const fn new(reader: R, words: &'a WordSource, allow_reveal: bool) -> Self {
        Self {
            reader,
            words,
            allow_reveal,
        }
    }

    /// Interpret one line of input
    ///
    /// Input is case-insensitive. Returns `None` for anything that is neither
    /// a command nor a word in the list, including `:s` when revealing is off.
    #[must_use]
    pub fn parse(&self, line: &str) -> Option<InputEvent> {
        let text = line.trim().to_ascii_uppercase();
        match text.as_str() {
            ":Q" => Some(InputEvent::Quit),
            ":S" if self.allow_reveal => Some(InputEvent::Reveal),
            _ => self.words.get(&text).cloned().map(InputEvent::Guess),
        }
    }

    /// Prompt until the player enters something acceptable
    ///
    /// `prompt` is written first; after rejected input the cursor is on a
    /// fresh line, so `retry_prompt` is used instead. End of input quits.
    ///
    /// # Errors
    /// Returns an error if reading input or writing the prompt fails.
    pub fn next_event<W: Write>(
        &mut self,
        out: &mut W,
        prompt: &str,
        retry_prompt: &str,
    ) -> io::Result<InputEvent> {
        write!(out, "{prompt}")?;
        loop {
            out.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(InputEvent::Quit);
            }

            if let Some(event) = self.parse(&line) {
                return Ok(event);
            }
            debug!(input = line.trim(), "rejected input");
            write!(out, "{retry_prompt}")?;
        }
    }
}
