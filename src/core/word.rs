//! Dictionary word representation
//!
//! A Word stores a fixed-length lowercase word along with its letter bytes.

use std::fmt;
use thiserror::Error;

/// Number of letters in every puzzle word
pub const WORD_LENGTH: usize = 5;

/// Letters counted as vowels when ranking suggestions
pub const VOWELS: [u8; 5] = *b"aeiou";

/// A 5-letter word drawn from the dictionary
///
/// Words are normalized to lowercase on construction, so ordering and
/// equality are case-insensitive with respect to the original input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("Saint").unwrap();
    /// assert_eq!(word.text(), "saint");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sa1nt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Build a word from letter bytes, normalizing case
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        let text: String = letters
            .iter()
            .map(|&b| char::from(b.to_ascii_lowercase()))
            .collect();
        Self::new(text)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a 1-indexed position
    ///
    /// # Panics
    /// Panics if position is 0 or greater than 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position - 1]
    }

    /// Check if the word contains a specific letter (either case)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter.to_ascii_lowercase())
    }

    /// Number of vowels in the word, counting repeats
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.chars.iter().filter(|ch| VOWELS.contains(ch)).count()
    }

    /// True when no letter appears more than once
    #[must_use]
    pub fn has_unique_letters(&self) -> bool {
        self.chars
            .iter()
            .enumerate()
            .all(|(i, ch)| !self.chars[i + 1..].contains(ch))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
