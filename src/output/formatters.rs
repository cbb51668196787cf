//! Formatting utilities for terminal output

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::solver::ScoredWord;

/// Words printed per row in candidate listings
pub const WORDS_PER_LINE: usize = 10;

/// Uppercase words joined into rows of `WORDS_PER_LINE`
#[must_use]
pub fn word_rows(words: &[Word]) -> Vec<String> {
    words
        .chunks(WORDS_PER_LINE)
        .map(|row| {
            row.iter()
                .map(|word| word.text().to_uppercase())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// `WORD (score: N)`
#[must_use]
pub fn suggestion_line(scored: &ScoredWord) -> String {
    format!(
        "{} (score: {})",
        scored.word.text().to_uppercase(),
        scored.score
    )
}

/// Format one round of feedback as emoji tiles
///
/// A position is green when the round fixed it, yellow when some letter was
/// reported misplaced there, and grey otherwise.
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    let constraints = &feedback.constraints;
    (1..=WORD_LENGTH)
        .map(|position| {
            if constraints.green.is_fixed(position) {
                '🟩'
            } else if constraints.yellow.excluded_at(position).is_empty() {
                '⬜'
            } else {
                '🟨'
            }
        })
        .collect()
}

/// Letters as an uppercase space-separated string, or `-` when there are none
#[must_use]
pub fn letter_list(letters: &[u8]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|&letter| char::from(letter.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
