//! The fixed list of valid words

use super::loader::{LoadError, read_optional};
use crate::core::Word;
use std::collections::BTreeSet;
use std::path::Path;

/// Set of valid words, iterated alphabetically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<Word>,
}

impl Dictionary {
    /// Load one word per line from a file
    ///
    /// Lines are trimmed and lower-cased; empty lines and lines that are not
    /// five letters are skipped. A missing file gives an empty dictionary.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file exists but cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_helper::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("data/words.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let Some(content) = read_optional(path, "word list")? else {
            return Ok(Self::default());
        };

        let dictionary = Self::parse(&content);
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse word-per-line text
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut skipped = 0usize;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match Word::new(line) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::debug!("Skipping dictionary entry '{line}': {e}");
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            log::debug!("Skipped {skipped} dictionary entries that are not 5-letter words");
        }

        Self { words }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Words in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Convert string slices to a dictionary, skipping anything that is not a word
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::words_from_slice;
///
/// let dictionary = words_from_slice(&["saint", "slant", "toolong"]);
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
