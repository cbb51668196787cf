//! Data loaded at start-up
//!
//! The dictionary of valid words and the per-position letter frequency table.
//! Both are read once and never modified afterwards.

mod dictionary;
mod frequency;
pub mod loader;

pub use dictionary::{Dictionary, words_from_slice};
pub use frequency::{FrequencyTable, parse_letters};
pub use loader::LoadError;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn data_dir() -> &'static Path {
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    #[test]
    fn bundled_word_list_is_valid() {
        let dictionary = Dictionary::load(data_dir().join("words.txt")).unwrap();
        assert!(dictionary.len() > 300);
        for word in ["saint", "slant", "plant", "guise", "poise", "noise"] {
            assert!(
                dictionary.iter().any(|w| w.text() == word),
                "Word '{word}' missing from bundled list"
            );
        }
    }

    #[test]
    fn bundled_frequency_files_cover_every_position() {
        let table = FrequencyTable::load(data_dir()).unwrap();
        for position in 1..=crate::core::WORD_LENGTH {
            assert!(
                !table.letters(position).is_empty(),
                "Position {position} has no ranked letters"
            );
        }
        assert_eq!(table.rank(1, b's'), Some(1));
    }
}
