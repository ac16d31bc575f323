//! Interactive multi-game session over a line-based terminal

use super::input::{GuessInput, InputEvent};
use crate::config::Config;
use crate::game::{EndReason, Session, SessionState, SessionSummary};
use crate::output::formatters::column_ruler;
use crate::output::{Board, end_text, help_text, words_text};
use crate::wordlists::{WordSource, WordSourceError};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

/// Word list for the configured word length
///
/// Uses the configured file for this length, falling back to the embedded
/// list when none is set.
///
/// # Errors
/// Returns `WordSourceError` if the file cannot be read or holds no words of
/// the right length.
pub fn load_word_source(config: &Config) -> Result<WordSource, WordSourceError> {
    match config.word_files.for_length(config.word_length) {
        Some(path) => WordSource::from_file(path, config.word_length),
        None => WordSource::embedded(config.word_length),
    }
}

/// Pick targets and start a session
///
/// # Errors
/// Returns an error if distinct targets cannot be picked.
pub fn start_session<R: Rng + ?Sized>(
    config: &Config,
    words: &WordSource,
    rng: &mut R,
) -> Result<Session> {
    let targets = words.pick_targets(config.num_games, rng)?;
    let session = Session::new(targets, config.max_guesses)?;
    info!(
        games = config.num_games,
        length = config.word_length,
        max_guesses = config.max_guesses,
        "session started"
    );
    Ok(session)
}

/// Play a session to its end
///
/// Each grid row is followed on the same line by the prompt for the next
/// guess; the player's Enter key ends the line.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    config: &Config,
    mut session: Session,
    words: &WordSource,
    reader: R,
    out: &mut W,
    color: bool,
) -> Result<SessionSummary> {
    let board = Board::new(config, color);
    let mut input = GuessInput::new(reader, words, config.allow_reveal);

    if config.show_config {
        writeln!(out, "{config}")?;
    }
    writeln!(out, "{}", help_text(config))?;
    if config.column_ruler > 0 {
        let (tens, units) = column_ruler(config.column_ruler);
        writeln!(out, "{tens}\n{units}")?;
    }

    let mut prompt = format!("{}{}", board.layout().heading_line(), board.prompt(&session));
    let reason = loop {
        let event = input
            .next_event(out, &prompt, &board.retry_prompt(&session))
            .context("failed to read guess")?;

        match event {
            InputEvent::Guess(guess) => {
                let state = session.submit_guess(&guess)?;
                let row = board.row(&session);
                if let SessionState::Ended(reason) = state {
                    write!(out, "{row}")?;
                    break reason;
                }
                prompt = format!("{row}{}", board.prompt(&session));
            }
            InputEvent::Reveal => {
                writeln!(out, "{}", words_text(&session.summary(), false))?;
                prompt = board.retry_prompt(&session);
            }
            InputEvent::Quit => {
                session.quit();
                break EndReason::Quit;
            }
        }
    };

    let summary = session.summary();
    writeln!(out, "{}", end_text(&summary, reason, color))?;
    out.flush()?;
    Ok(summary)
}
