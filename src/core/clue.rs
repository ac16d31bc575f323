//! Per-position feedback for a single guess
//!
//! `evaluate` implements the two-pass rule: exact matches claim their target
//! position first, then each remaining guess letter claims the first
//! unclaimed matching target position. Each target letter occurrence is
//! consumed at most once, so repeated letters never earn more feedback than
//! the target holds.

use super::Word;

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Letter not usable at this position once duplicates are claimed
    Miss,
    /// Letter is in the target, at another position
    Present,
    /// Letter and position both correct
    Hit,
}

impl Clue {
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Calculate the clues when `guess` is played against `target`
///
/// # Algorithm
/// 1. First pass: mark exact position matches as `Hit` and claim the target position
/// 2. Second pass: for every other guess position, claim the first unclaimed
///    target position (excluding its own) holding the same letter and mark `Present`
/// 3. Everything untouched stays `Miss`
///
/// # Panics
/// Panics if the words differ in length. Guesses are validated against the
/// word length before they reach a game.
///
/// # Examples
/// ```
/// use multi_wordle::core::{Clue, Word, evaluate};
///
/// let target = Word::new("crane").unwrap();
/// let guess = Word::new("slate").unwrap();
///
/// use Clue::{Hit, Miss};
/// assert_eq!(evaluate(&target, &guess), vec![Miss, Miss, Hit, Miss, Hit]);
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Vec<Clue> {
    assert_eq!(
        target.len(),
        guess.len(),
        "guess length must match target length"
    );

    let target = target.letters();
    let guess = guess.letters();
    let mut clues = vec![Clue::Miss; guess.len()];
    let mut claimed = vec![false; target.len()];

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            clues[i] = Clue::Hit;
            claimed[i] = true;
        }
    }

    // Second pass: right letter, wrong position
    for (i, &g) in guess.iter().enumerate() {
        if clues[i] != Clue::Miss {
            continue;
        }

        let found = target
            .iter()
            .enumerate()
            .position(|(j, &t)| j != i && !claimed[j] && t == g);

        if let Some(j) = found {
            clues[i] = Clue::Present;
            claimed[j] = true;
        }
    }

    clues
}
