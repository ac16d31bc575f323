//! The set of valid words for one session
//!
//! A `WordSource` is built once at startup for the configured word length and
//! handed by reference to whatever validates guesses or picks targets.

use super::WORDS;
use super::loader::{read_lines, words_of_length};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Attempts made to find a target outside the excluded words
pub const MAX_PICK_ATTEMPTS: usize = 10;

/// Errors from loading words or picking targets
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("could not read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("insufficient words to play: need {needed} unique {length}-letter words, found {found}")]
    Insufficient {
        length: usize,
        needed: usize,
        found: usize,
    },
    #[error(
        "after {0} attempts, could not find a random word from the word list which is not already a target"
    )]
    Exhausted(usize),
}

impl WordSourceError {
    /// Process exit status for this error category
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Read { .. } => 11,
            Self::Insufficient { .. } => 12,
            Self::Exhausted(_) => 13,
        }
    }
}

/// Where the words came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded word list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A target chosen by `WordSource::pick_target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub word: Word,
    /// Random draws needed to find a word outside the exclusions
    pub attempts: usize,
}

/// Deduplicated valid words of a single length
#[derive(Debug, Clone)]
pub struct WordSource {
    length: usize,
    origin: Origin,
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl WordSource {
    /// Build a source from raw lines, keeping the unique `length`-letter words
    ///
    /// # Errors
    /// Returns `WordSourceError::Insufficient` if no usable word remains.
    pub fn from_lines<I, S>(lines: I, length: usize, origin: Origin) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words_of_length(lines, length);
        if words.is_empty() {
            return Err(WordSourceError::Insufficient {
                length,
                needed: 1,
                found: 0,
            });
        }

        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.text().to_owned(), i))
            .collect();

        info!(count = words.len(), length, %origin, "loaded word list");

        Ok(Self {
            length,
            origin,
            words,
            index,
        })
    }

    /// Words of `length` from the list compiled into the binary
    ///
    /// # Errors
    /// Returns `WordSourceError::Insufficient` if the embedded list has no
    /// words of that length.
    pub fn embedded(length: usize) -> Result<Self, WordSourceError> {
        Self::from_lines(WORDS.iter().copied(), length, Origin::Embedded)
    }

    /// Words of `length` from a word list file
    ///
    /// # Errors
    /// Returns `WordSourceError::Read` if the file cannot be read, or
    /// `WordSourceError::Insufficient` if it has no words of that length.
    pub fn from_file(path: &Path, length: usize) -> Result<Self, WordSourceError> {
        let lines = read_lines(path).map_err(|source| WordSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(lines = lines.len(), path = %path.display(), "read word list file");
        Self::from_lines(lines, length, Origin::File(path.to_path_buf()))
    }

    /// Word length every word in this source has
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Look up a word by its (uppercase) text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Pick a random word not in `excluding`
    ///
    /// # Errors
    /// Returns `WordSourceError::Exhausted` if `MAX_PICK_ATTEMPTS` random
    /// draws all landed on excluded words.
    pub fn pick_target<R: Rng + ?Sized>(
        &self,
        excluding: &[Word],
        rng: &mut R,
    ) -> Result<Pick, WordSourceError> {
        for attempt in 1..=MAX_PICK_ATTEMPTS {
            let Some(word) = self.words.choose(rng) else {
                break;
            };
            if !excluding.contains(word) {
                return Ok(Pick {
                    word: word.clone(),
                    attempts: attempt,
                });
            }
        }
        Err(WordSourceError::Exhausted(MAX_PICK_ATTEMPTS))
    }

    /// Pick `count` pairwise-distinct targets, in game order
    ///
    /// # Errors
    /// Returns `WordSourceError::Insufficient` if the source holds fewer than
    /// `count` words, or `WordSourceError::Exhausted` if a unique target could
    /// not be found.
    pub fn pick_targets<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Word>, WordSourceError> {
        if self.len() < count {
            return Err(WordSourceError::Insufficient {
                length: self.length,
                needed: count,
                found: self.len(),
            });
        }

        let mut targets = Vec::with_capacity(count);
        let mut max_attempts = 0;
        for _ in 0..count {
            let pick = self.pick_target(&targets, rng)?;
            max_attempts = max_attempts.max(pick.attempts);
            targets.push(pick.word);
        }

        debug!(count, max_attempts, "picked unique targets");
        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn source(lines: &[&str]) -> WordSource {
        WordSource::from_lines(lines, 5, Origin::Embedded).unwrap()
    }

    #[test]
    fn lookup_by_text() {
        let words = source(&["crane", "slate"]);
        assert!(words.contains("CRANE"));
        assert!(!words.contains("crane"));
        assert_eq!(words.get("SLATE").map(Word::text), Some("SLATE"));
        assert!(words.get("IRATE").is_none());
    }

    #[test]
    fn empty_source_is_insufficient() {
        let err = WordSource::from_lines(["abc", "toolong"], 5, Origin::Embedded).unwrap_err();
        assert!(matches!(err, WordSourceError::Insufficient { found: 0, .. }));
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn embedded_has_common_lengths() {
        let five = WordSource::embedded(5).unwrap();
        assert!(five.len() > 100);
        assert!(five.contains("CRANE"));
        assert!(five.words().iter().all(|w| w.len() == 5));

        assert!(WordSource::embedded(4).is_ok());
        assert!(WordSource::embedded(6).is_ok());
        assert!(WordSource::embedded(15).is_err());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = WordSource::from_file(Path::new("/nonexistent/words.txt"), 5).unwrap_err();
        assert!(matches!(err, WordSourceError::Read { .. }));
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn pick_target_avoids_exclusions() {
        let words = source(&["crane", "slate", "irate", "trace"]);
        let excluded = vec![Word::new("CRANE").unwrap()];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let pick = words.pick_target(&excluded, &mut rng).unwrap();
            assert_ne!(pick.word.text(), "CRANE");
            assert!((1..=MAX_PICK_ATTEMPTS).contains(&pick.attempts));
        }
    }

    #[test]
    fn pick_target_exhausts() {
        let words = source(&["crane"]);
        let excluded = vec![Word::new("CRANE").unwrap()];
        let mut rng = StdRng::seed_from_u64(1);

        let err = words.pick_target(&excluded, &mut rng).unwrap_err();
        assert!(matches!(err, WordSourceError::Exhausted(MAX_PICK_ATTEMPTS)));
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn pick_targets_are_distinct() {
        let words = WordSource::embedded(5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let targets = words.pick_targets(4, &mut rng).unwrap();

        assert_eq!(targets.len(), 4);
        for (i, target) in targets.iter().enumerate() {
            assert!(words.contains(target.text()));
            assert!(!targets[..i].contains(target));
        }
    }

    #[test]
    fn pick_targets_needs_enough_words() {
        let words = source(&["crane", "slate"]);
        let mut rng = StdRng::seed_from_u64(3);
        let err = words.pick_targets(3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            WordSourceError::Insufficient {
                needed: 3,
                found: 2,
                ..
            }
        ));
    }
}
