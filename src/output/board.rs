//! Rows of the game grid and the guess prompt

use super::formatters::{clue_cells, paint, status_cells};
use crate::config::{Config, DisplayFormat, FieldLength, StatusKind};
use crate::game::Session;
use crate::layout::{GameFields, LayoutPolicy};

/// Renders a session's games into grid rows
#[derive(Debug, Clone)]
pub struct Board {
    layout: LayoutPolicy,
    clue_length: FieldLength,
    status_length: FieldLength,
    status_kind: StatusKind,
    section_delim: String,
    word_prompt: String,
    color: bool,
}

impl Board {
    #[must_use]
    pub fn new(config: &Config, color: bool) -> Self {
        Self {
            layout: LayoutPolicy::new(config),
            clue_length: config.clue_length,
            status_length: config.status_length,
            status_kind: config.status_kind,
            section_delim: config.section_delim.clone(),
            word_prompt: config.word_prompt.clone(),
            color,
        }
    }

    #[must_use]
    pub const fn layout(&self) -> &LayoutPolicy {
        &self.layout
    }

    /// Grid row for the latest guess
    ///
    /// A game completed on an earlier guess shows a blank clue field.
    #[must_use]
    pub fn row(&self, session: &Session) -> String {
        let fields: Vec<GameFields> = session
            .games()
            .iter()
            .map(|game| {
                let clue = if game.completed_earlier() {
                    self.layout.clue_padding()
                } else {
                    paint(&clue_cells(game), self.clue_length, self.color)
                };
                let status = (self.layout.format() != DisplayFormat::NoStatus).then(|| {
                    paint(
                        &status_cells(game, self.status_kind),
                        self.status_length,
                        self.color,
                    )
                });
                GameFields {
                    clue,
                    status,
                    finished: game.is_complete(),
                }
            })
            .collect();
        self.layout.arrange_row(&fields)
    }

    /// Prompt for the next guess, e.g. ` 3|Word? `
    #[must_use]
    pub fn prompt(&self, session: &Session) -> String {
        format!(
            "{:2}{}{}",
            session.guess_count() + 1,
            self.section_delim,
            self.word_prompt
        )
    }

    /// Prompt repeated on a fresh line, aligned under the grid
    #[must_use]
    pub fn retry_prompt(&self, session: &Session) -> String {
        format!("{}{}", self.layout.padding_line(), self.prompt(session))
    }
}
