//! Aggregated per-letter knowledge for one game
//!
//! Both maps are fixed 26-slot arrays indexed by `letter - b'A'`.

use super::Clue;

/// Number of letters in the alphabet the game is played with
pub const ALPHABET_LEN: usize = 26;

/// Outcome recorded for a letter across all guesses so far
///
/// Variants are ordered by precedence: `Unset < Miss < Present < Hit`.
/// A recorded status only ever moves up this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unset,
    Miss,
    Present,
    Hit,
}

impl LetterStatus {
    /// Whether the letter is known to be in the target
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Present | Self::Hit)
    }
}

impl From<Clue> for LetterStatus {
    fn from(clue: Clue) -> Self {
        match clue {
            Clue::Miss => Self::Miss,
            Clue::Present => Self::Present,
            Clue::Hit => Self::Hit,
        }
    }
}

/// Slot of an uppercase ASCII letter
///
/// # Panics
/// Panics if `letter` is not in `b'A'..=b'Z'`
#[inline]
fn slot(letter: u8) -> usize {
    assert!(letter.is_ascii_uppercase(), "letter must be A-Z");
    usize::from(letter - b'A')
}

/// Iterate the alphabet as bytes
pub fn alphabet() -> impl Iterator<Item = u8> {
    b'A'..=b'Z'
}

/// Highest-precedence status seen for each letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterBoard {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl LetterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for `letter`
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterStatus {
        self.statuses[slot(letter)]
    }

    /// Record `status` for `letter` unless a higher one is already recorded
    pub fn raise(&mut self, letter: u8, status: LetterStatus) {
        let current = &mut self.statuses[slot(letter)];
        *current = (*current).max(status);
    }

    /// Number of letters known to be in the target
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_known()).count()
    }

    /// Mark every still-unset letter as `Miss`
    pub fn collapse_unset(&mut self) {
        for status in &mut self.statuses {
            if *status == LetterStatus::Unset {
                *status = LetterStatus::Miss;
            }
        }
    }

    /// Iterate `(letter, status)` pairs from A to Z
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        alphabet().zip(self.statuses.iter().copied())
    }
}

/// Letters that have appeared in any guess so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriedLetters {
    tried: [bool; ALPHABET_LEN],
}

impl TriedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, letter: u8) {
        self.tried[slot(letter)] = true;
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.tried[slot(letter)]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tried.iter().filter(|&&t| t).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_precedence_ordering() {
        assert!(LetterStatus::Unset < LetterStatus::Miss);
        assert!(LetterStatus::Miss < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Hit);
    }

    #[test]
    fn raise_never_downgrades() {
        let mut board = LetterBoard::new();
        board.raise(b'E', LetterStatus::Hit);
        board.raise(b'E', LetterStatus::Present);
        board.raise(b'E', LetterStatus::Miss);
        assert_eq!(board.get(b'E'), LetterStatus::Hit);

        board.raise(b'A', LetterStatus::Miss);
        board.raise(b'A', LetterStatus::Present);
        assert_eq!(board.get(b'A'), LetterStatus::Present);
    }

    #[test]
    fn known_count_counts_present_and_hit() {
        let mut board = LetterBoard::new();
        board.raise(b'A', LetterStatus::Hit);
        board.raise(b'B', LetterStatus::Present);
        board.raise(b'C', LetterStatus::Miss);
        assert_eq!(board.known_count(), 2);
    }

    #[test]
    fn collapse_only_touches_unset() {
        let mut board = LetterBoard::new();
        board.raise(b'A', LetterStatus::Hit);
        board.raise(b'B', LetterStatus::Present);
        board.collapse_unset();

        assert_eq!(board.get(b'A'), LetterStatus::Hit);
        assert_eq!(board.get(b'B'), LetterStatus::Present);
        assert!(
            board
                .iter()
                .filter(|&(letter, _)| letter > b'B')
                .all(|(_, status)| status == LetterStatus::Miss)
        );
    }

    #[test]
    fn tried_letters_set() {
        let mut tried = TriedLetters::new();
        assert!(tried.is_empty());
        tried.insert(b'Q');
        tried.insert(b'Q');
        tried.insert(b'Z');
        assert!(tried.contains(b'Q'));
        assert!(!tried.contains(b'A'));
        assert_eq!(tried.len(), 2);
    }

    #[test]
    #[should_panic(expected = "letter must be A-Z")]
    fn lowercase_letter_rejected() {
        let _ = LetterBoard::new().get(b'a');
    }
}
