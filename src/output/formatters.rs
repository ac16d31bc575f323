//! Formatting utilities for terminal output
//!
//! Games are first turned into plain `Cell`s (a character plus a tone), which
//! keeps the symbolic content testable; `paint` then applies colour.

use crate::config::{FieldLength, StatusKind};
use crate::core::{Clue, LetterStatus, alphabet};
use crate::game::GameState;
use colored::Colorize;

/// Colour class of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Hit,
    Present,
    Plain,
}

impl From<Clue> for Tone {
    fn from(clue: Clue) -> Self {
        match clue {
            Clue::Hit => Self::Hit,
            Clue::Present => Self::Present,
            Clue::Miss => Self::Plain,
        }
    }
}

/// One displayed character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Cell {
    const fn plain(ch: char) -> Self {
        Self {
            ch,
            tone: Tone::Plain,
        }
    }
}

/// Marker for letters known to be absent, or already tried
const EXCLUDED: char = '.';

/// Guessed letters of the latest guess, toned by their clues
#[must_use]
pub fn clue_cells(game: &GameState) -> Vec<Cell> {
    let Some(guess) = game.last_guess() else {
        return Vec::new();
    };
    guess
        .letters()
        .iter()
        .zip(game.clues())
        .map(|(&letter, &clue)| Cell {
            ch: char::from(letter),
            tone: clue.into(),
        })
        .collect()
}

/// Alphabet summary for a game
///
/// `ClueInfo` tones letters by their best outcome and shows `.` for letters
/// known to be absent. `GuessInfo` shows `.` for every letter already tried.
#[must_use]
pub fn status_cells(game: &GameState, kind: StatusKind) -> Vec<Cell> {
    match kind {
        StatusKind::ClueInfo => game
            .letters()
            .iter()
            .map(|(letter, status)| match status {
                LetterStatus::Hit => Cell {
                    ch: char::from(letter),
                    tone: Tone::Hit,
                },
                LetterStatus::Present => Cell {
                    ch: char::from(letter),
                    tone: Tone::Present,
                },
                LetterStatus::Miss => Cell::plain(EXCLUDED),
                LetterStatus::Unset => Cell::plain(char::from(letter)),
            })
            .collect(),
        StatusKind::GuessInfo => alphabet()
            .map(|letter| {
                if game.tried().contains(letter) {
                    Cell::plain(EXCLUDED)
                } else {
                    Cell::plain(char::from(letter))
                }
            })
            .collect(),
    }
}

/// Render cells, adding a trailing space per cell for long fields
#[must_use]
pub fn paint(cells: &[Cell], length: FieldLength, color: bool) -> String {
    let pad = match length {
        FieldLength::Long => " ",
        FieldLength::Short => "",
    };

    cells
        .iter()
        .map(|cell| {
            let text = format!("{}{pad}", cell.ch);
            if !color {
                return text;
            }
            match cell.tone {
                Tone::Hit => text.black().on_bright_green().to_string(),
                Tone::Present => text.black().on_yellow().to_string(),
                Tone::Plain => text,
            }
        })
        .collect()
}

/// Two-line ruler marking every column up to `count`
///
/// The first line carries the tens digit at each multiple of ten, the second
/// the units digit everywhere else.
#[must_use]
pub fn column_ruler(count: usize) -> (String, String) {
    let tens = (1..=count)
        .map(|i| {
            if i % 10 == 0 {
                char::from_digit(((i / 10) % 10) as u32, 10).unwrap_or(' ')
            } else {
                ' '
            }
        })
        .collect();
    let units = (1..=count)
        .map(|i| {
            if i % 10 == 0 {
                ' '
            } else {
                char::from_digit((i % 10) as u32, 10).unwrap_or(' ')
            }
        })
        .collect();
    (tens, units)
}
