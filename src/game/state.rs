//! State of a single game within a session

use crate::core::{Clue, LetterBoard, TriedLetters, Word, evaluate};
use tracing::debug;

/// One game: a hidden target and everything learned about it so far
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    guess_count: u32,
    completed_at: Option<u32>,
    last_guess: Option<Word>,
    clues: Vec<Clue>,
    letters: LetterBoard,
    tried: TriedLetters,
    all_letters_known: bool,
}

impl GameState {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            guess_count: 0,
            completed_at: None,
            last_guess: None,
            clues: Vec::new(),
            letters: LetterBoard::new(),
            tried: TriedLetters::new(),
            all_letters_known: false,
        }
    }

    /// Apply a guess to this game
    ///
    /// Replaces the clues with those for `guess`, folds the clues into the
    /// letter statuses (never downgrading one), records the tried letters and
    /// marks the game complete on the first correct guess. Once every target
    /// letter has been identified, all unset letters are fixed to `Miss`; this
    /// happens at most once per game.
    ///
    /// # Panics
    /// Panics if `guess` is not the same length as the target.
    pub fn submit_guess(&mut self, guess: &Word) {
        self.clues = evaluate(&self.target, guess);
        self.guess_count += 1;

        for (&letter, &clue) in guess.letters().iter().zip(&self.clues) {
            self.tried.insert(letter);
            self.letters.raise(letter, clue.into());
        }

        if self.completed_at.is_none() && *guess == self.target {
            self.completed_at = Some(self.guess_count);
        }

        if !self.all_letters_known && self.letters.known_count() >= self.target.len() {
            self.letters.collapse_unset();
            self.all_letters_known = true;
            debug!(target_len = self.target.len(), guess = self.guess_count, "all letters known");
        }

        self.last_guess = Some(guess.clone());
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Guess number on which the target was first matched
    #[must_use]
    pub const fn completed_at(&self) -> Option<u32> {
        self.completed_at
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether the game was completed by a guess before the latest one
    #[must_use]
    pub fn completed_earlier(&self) -> bool {
        self.completed_at.is_some_and(|at| at < self.guess_count)
    }

    #[must_use]
    pub const fn last_guess(&self) -> Option<&Word> {
        self.last_guess.as_ref()
    }

    /// Clues for the latest guess, empty before any guess
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterBoard {
        &self.letters
    }

    #[must_use]
    pub const fn tried(&self) -> &TriedLetters {
        &self.tried
    }

    #[must_use]
    pub const fn all_letters_known(&self) -> bool {
        self.all_letters_known
    }
}
