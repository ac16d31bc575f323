//! Several games driven in lockstep by one stream of guesses
//!
//! A `Session` forwards every guess to each of its games in construction
//! order, then checks whether every game is complete or the guess limit has
//! been reached. Once ended, no further guesses are accepted and a
//! `SessionSummary` can be read for final scoring.

use super::GameState;
use crate::core::Word;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Why a session stopped accepting guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every game was completed
    AllComplete,
    /// The guess limit was reached first
    OutOfGuesses,
    /// The player quit
    Quit,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Ended(EndReason),
}

/// Errors from constructing or driving a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a session needs at least one game")]
    NoGames,
    #[error("target words must all have {expected} letters, got {found}")]
    MixedLengths { expected: usize, found: usize },
    #[error("target word {0} is used by more than one game")]
    DuplicateTarget(Word),
    #[error("guess must have {expected} letters, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("the session has ended; no more guesses are accepted")]
    Ended,
}

/// Coordinator for `G` simultaneous games sharing one guess stream
#[derive(Debug, Clone)]
pub struct Session {
    games: Vec<GameState>,
    word_length: usize,
    max_guesses: u32,
    state: SessionState,
}

impl Session {
    /// Start a session with one game per target, in the given order
    ///
    /// # Errors
    /// Returns `SessionError` if there are no targets, the targets differ in
    /// length, or two games would share a target.
    pub fn new(targets: Vec<Word>, max_guesses: u32) -> Result<Self, SessionError> {
        let word_length = targets.first().ok_or(SessionError::NoGames)?.len();

        for (i, target) in targets.iter().enumerate() {
            if target.len() != word_length {
                return Err(SessionError::MixedLengths {
                    expected: word_length,
                    found: target.len(),
                });
            }
            if targets[..i].contains(target) {
                return Err(SessionError::DuplicateTarget(target.clone()));
            }
        }

        debug!(games = targets.len(), word_length, max_guesses, "session started");

        Ok(Self {
            games: targets.into_iter().map(GameState::new).collect(),
            word_length,
            max_guesses: max_guesses.max(1),
            state: SessionState::InProgress,
        })
    }

    /// Apply one guess to every game and re-evaluate termination
    ///
    /// A rejected guess leaves every game untouched.
    ///
    /// # Errors
    /// Returns `SessionError::Ended` after the session has ended, or
    /// `SessionError::WrongLength` if the guess does not match the word length.
    pub fn submit_guess(&mut self, guess: &Word) -> Result<SessionState, SessionError> {
        if self.is_ended() {
            return Err(SessionError::Ended);
        }
        if guess.len() != self.word_length {
            return Err(SessionError::WrongLength {
                expected: self.word_length,
                found: guess.len(),
            });
        }

        for (index, game) in self.games.iter_mut().enumerate() {
            let was_complete = game.is_complete();
            game.submit_guess(guess);
            if !was_complete && game.is_complete() {
                info!(game = index + 1, guess = game.guess_count(), "game completed");
            }
        }

        if self.games.iter().all(GameState::is_complete) {
            self.end(EndReason::AllComplete);
        } else if self.guess_count() >= self.max_guesses {
            self.end(EndReason::OutOfGuesses);
        }

        Ok(self.state)
    }

    /// Stop the session at the player's request
    pub fn quit(&mut self) {
        if !self.is_ended() {
            self.end(EndReason::Quit);
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.state = SessionState::Ended(reason);
        info!(?reason, guesses = self.guess_count(), "session ended");
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        matches!(self.state, SessionState::Ended(_))
    }

    /// Games in construction order
    #[must_use]
    pub fn games(&self) -> &[GameState] {
        &self.games
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    /// Guesses made so far; every game shares the same count
    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.games.first().map_or(0, GameState::guess_count)
    }

    /// Target words in construction order
    #[must_use]
    pub fn targets(&self) -> Vec<&Word> {
        self.games.iter().map(GameState::target).collect()
    }

    /// Snapshot of the scores so far
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            completed_at: self.games.iter().map(GameState::completed_at).collect(),
            targets: self.games.iter().map(|g| g.target().clone()).collect(),
            turns: self.guess_count(),
            word_length: self.word_length,
        }
    }
}

/// Final (or running) scores of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Completion guess per game, `None` if not completed
    pub completed_at: Vec<Option<u32>>,
    pub targets: Vec<Word>,
    pub turns: u32,
    pub word_length: usize,
}

impl SessionSummary {
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_at.iter().flatten().count()
    }

    /// Sum of the completion guesses of completed games
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.completed_at.iter().flatten().sum()
    }

    /// Per-game scores such as `[3:?:5]`
    #[must_use]
    pub fn score_line(&self) -> String {
        let scores: Vec<String> = self
            .completed_at
            .iter()
            .map(|at| at.map_or_else(|| "?".to_string(), |n| n.to_string()))
            .collect();
        format!("[{}]", scores.join(":"))
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} completed | {}@{} turns | {} letters",
            self.completed_count(),
            self.completed_at.len(),
            self.total_score(),
            self.turns,
            self.word_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Clue;
    use tracing_test::traced_test;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn guess(session: &mut Session, text: &str) -> SessionState {
        session.submit_guess(&Word::new(text).unwrap()).unwrap()
    }

    #[test]
    fn new_rejects_bad_targets() {
        assert_eq!(Session::new(Vec::new(), 6).unwrap_err(), SessionError::NoGames);
        assert!(matches!(
            Session::new(words(&["CRANE", "CRANES"]), 6),
            Err(SessionError::MixedLengths { expected: 5, found: 6 })
        ));
        assert!(matches!(
            Session::new(words(&["CRANE", "SLATE", "CRANE"]), 6),
            Err(SessionError::DuplicateTarget(_))
        ));
    }

    #[test]
    fn single_game_crane_scenario() {
        let mut session = Session::new(words(&["CRANE"]), 6).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);

        assert_eq!(guess(&mut session, "SLATE"), SessionState::InProgress);
        assert_eq!(guess(&mut session, "CRATE"), SessionState::InProgress);
        assert_eq!(guess(&mut session, "CRANE"), SessionState::Ended(EndReason::AllComplete));

        let game = &session.games()[0];
        assert_eq!(game.completed_at(), Some(3));
        assert!(game.clues().iter().all(|c| *c == Clue::Hit));
    }

    #[test]
    #[traced_test]
    fn two_games_complete_independently() {
        let mut session = Session::new(words(&["APPLE", "GRAPE"]), 6).unwrap();

        assert_eq!(guess(&mut session, "GRAPE"), SessionState::InProgress);
        assert!(!session.games()[0].is_complete());
        assert_eq!(session.games()[1].completed_at(), Some(1));
        assert!(logs_contain("game completed"));

        assert_eq!(guess(&mut session, "SLATE"), SessionState::InProgress);
        assert_eq!(session.games()[1].completed_at(), Some(1));
        assert_eq!(session.games()[1].guess_count(), 2);

        assert_eq!(
            guess(&mut session, "APPLE"),
            SessionState::Ended(EndReason::AllComplete)
        );
        assert_eq!(session.summary().completed_at, vec![Some(3), Some(1)]);
    }

    #[test]
    fn two_games_run_out_of_guesses() {
        let mut session = Session::new(words(&["APPLE", "GRAPE"]), 6).unwrap();
        guess(&mut session, "GRAPE");
        for _ in 0..4 {
            assert_eq!(guess(&mut session, "SLATE"), SessionState::InProgress);
        }
        assert_eq!(
            guess(&mut session, "CRANE"),
            SessionState::Ended(EndReason::OutOfGuesses)
        );
        assert_eq!(session.guess_count(), 6);
    }

    #[test]
    fn win_on_last_guess_counts_as_complete() {
        let mut session = Session::new(words(&["CRANE"]), 2).unwrap();
        guess(&mut session, "SLATE");
        assert_eq!(
            guess(&mut session, "CRANE"),
            SessionState::Ended(EndReason::AllComplete)
        );
    }

    #[test]
    fn ended_session_rejects_guesses() {
        let mut session = Session::new(words(&["CRANE"]), 1).unwrap();
        guess(&mut session, "SLATE");
        assert!(session.is_ended());

        let err = session.submit_guess(&Word::new("CRANE").unwrap()).unwrap_err();
        assert_eq!(err, SessionError::Ended);
        assert_eq!(session.guess_count(), 1);
    }

    #[test]
    fn wrong_length_guess_touches_no_game() {
        let mut session = Session::new(words(&["CRANE", "SLATE"]), 6).unwrap();
        let err = session.submit_guess(&Word::new("CRANES").unwrap()).unwrap_err();
        assert_eq!(err, SessionError::WrongLength { expected: 5, found: 6 });
        assert!(session.games().iter().all(|g| g.guess_count() == 0));
    }

    #[test]
    fn quit_ends_session() {
        let mut session = Session::new(words(&["CRANE"]), 6).unwrap();
        guess(&mut session, "SLATE");
        session.quit();
        assert_eq!(session.state(), SessionState::Ended(EndReason::Quit));
        assert_eq!(session.submit_guess(&Word::new("CRANE").unwrap()), Err(SessionError::Ended));
    }

    #[test]
    fn summary_formats_scores() {
        let mut session = Session::new(words(&["APPLE", "GRAPE", "CRANE"]), 6).unwrap();
        guess(&mut session, "SLATE");
        guess(&mut session, "GRAPE");
        guess(&mut session, "CRANE");
        session.quit();

        let summary = session.summary();
        assert_eq!(summary.score_line(), "[?:2:3]");
        assert_eq!(summary.completed_count(), 2);
        assert_eq!(summary.total_score(), 5);
        assert_eq!(summary.to_string(), "2/3 completed | 5@3 turns | 5 letters");
        assert_eq!(
            session.targets(),
            words(&["APPLE", "GRAPE", "CRANE"]).iter().collect::<Vec<_>>()
        );
    }
}
