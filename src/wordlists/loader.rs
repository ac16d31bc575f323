//! Word list loading utilities
//!
//! Provides functions to read word list files and filter raw lines down to
//! unique words of one length.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Read every line of a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use multi_wordle::wordlists::loader::read_lines;
///
/// let lines = read_lines("data/words.txt").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Keep the unique `length`-letter words from raw lines
///
/// Lines are trimmed and uppercased. Lines with anything other than ASCII
/// letters, or of another length, are skipped. The first occurrence of a
/// repeated word wins, so the original order is kept.
///
/// # Examples
/// ```
/// use multi_wordle::wordlists::loader::words_of_length;
///
/// let words = words_of_length(["crane", "Slate", "CRANE", "cranes", "cr4ne"], 5);
/// let texts: Vec<_> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn words_of_length<I, S>(lines: I, length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();

    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.len() == length {
                Word::new(trimmed).ok()
            } else {
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
