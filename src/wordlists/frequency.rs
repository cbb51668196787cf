//! Positional letter-frequency rankings
//!
//! One file per position (`pos1.txt` .. `pos5.txt`), most frequent letter
//! first. Each line is either `count letter` or just `letter`; the count only
//! matters through the line order.

use super::loader::{LoadError, read_optional};
use crate::core::WORD_LENGTH;
use std::path::Path;

/// Per-position letters ordered by frequency, most frequent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    positions: [Vec<u8>; WORD_LENGTH],
}

impl FrequencyTable {
    /// Load `pos1.txt` through `pos5.txt` from a directory
    ///
    /// A missing file leaves that position empty.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a file exists but cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_helper::wordlists::FrequencyTable;
    ///
    /// let table = FrequencyTable::load("data").unwrap();
    /// println!("Most common first letters: {:?}", table.top_letters(1, 3));
    /// ```
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let mut table = Self::default();

        for position in 1..=WORD_LENGTH {
            let path = dir.join(format!("pos{position}.txt"));
            if let Some(content) = read_optional(&path, "frequency file")? {
                table.set_position(position, &content);
                log::info!(
                    "Loaded {} ranked letters for position {position}",
                    table.letters(position).len()
                );
            }
        }

        Ok(table)
    }

    /// Build a table from the raw contents of each position's file
    #[must_use]
    pub fn from_contents(contents: [&str; WORD_LENGTH]) -> Self {
        let mut table = Self::default();
        for (i, content) in contents.iter().enumerate() {
            table.set_position(i + 1, content);
        }
        table
    }

    /// Replace one position's ranking with the letters parsed from `content`
    pub fn set_position(&mut self, position: usize, content: &str) {
        if let Some(slot) = position.checked_sub(1).and_then(|i| self.positions.get_mut(i)) {
            *slot = parse_letters(content);
        }
    }

    /// Full ranked letter list for a 1-indexed position (lowercase)
    #[must_use]
    pub fn letters(&self, position: usize) -> &[u8] {
        position
            .checked_sub(1)
            .and_then(|i| self.positions.get(i))
            .map_or(&[], Vec::as_slice)
    }

    /// First `n` letters for a position
    #[must_use]
    pub fn top_letters(&self, position: usize, n: usize) -> &[u8] {
        let letters = self.letters(position);
        &letters[..n.min(letters.len())]
    }

    /// 1-indexed rank of `letter` at `position`, or `None` if not listed
    #[must_use]
    pub fn rank(&self, position: usize, letter: u8) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        self.letters(position)
            .iter()
            .position(|&l| l == letter)
            .map(|i| i + 1)
    }

    /// True when no position has any ranked letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(Vec::is_empty)
    }
}

/// Parse one frequency file into lowercase letters, preserving order
///
/// The last whitespace-separated token of each line is the letter. Empty
/// lines and lines whose token is not a single letter are skipped.
#[must_use]
pub fn parse_letters(content: &str) -> Vec<u8> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .filter_map(|token| match token.as_bytes() {
            [b] if b.is_ascii_alphabetic() => Some(b.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}
