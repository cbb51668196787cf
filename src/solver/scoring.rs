//! Ranking candidates by positional letter frequency
//!
//! A word's score is the sum of its letters' frequency ranks over the
//! positions not already fixed by green feedback. Lower is better.

use crate::core::{Constraints, WORD_LENGTH, Word};
use crate::wordlists::FrequencyTable;

/// Added for a letter that does not appear in a position's frequency list
pub const PENALTY_SCORE: usize = 1000;

/// Suggested when there is nothing to rank
pub const DEFAULT_FIRST_GUESS: &str = "SAINT";

/// A candidate with its frequency score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: usize,
}

/// What to suggest next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// No candidates: fall back to the fixed opening word
    Default(&'static str),
    /// Scored candidates, best first
    Ranked(Vec<ScoredWord>),
}

impl Suggestion {
    /// Scored words, empty for the default suggestion
    #[must_use]
    pub fn ranked(&self) -> &[ScoredWord] {
        match self {
            Self::Default(_) => &[],
            Self::Ranked(words) => words,
        }
    }

    /// The single best word to try next, uppercase
    #[must_use]
    pub fn best(&self) -> String {
        match self {
            Self::Default(word) => (*word).to_string(),
            Self::Ranked(words) => words
                .first()
                .map_or_else(|| DEFAULT_FIRST_GUESS.to_string(), |s| s.word.text().to_uppercase()),
        }
    }
}

/// Score one word against the open positions
#[must_use]
pub fn word_score(word: &Word, constraints: &Constraints, frequencies: &FrequencyTable) -> usize {
    (1..=WORD_LENGTH)
        .filter(|&position| !constraints.green.is_fixed(position))
        .map(|position| {
            frequencies
                .rank(position, word.char_at(position))
                .unwrap_or(PENALTY_SCORE)
        })
        .sum()
}

/// Score every word, sorted by score then alphabetically
///
/// If every position is green-fixed, all words score 0.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Constraints, parse_green};
/// use wordle_helper::solver::score_words;
/// use wordle_helper::wordlists::{FrequencyTable, words_from_slice};
///
/// let words = words_from_slice(&["poise", "guise"]);
/// let constraints = Constraints { green: parse_green(".OISE"), ..Constraints::default() };
/// let table = FrequencyTable::from_contents(["g\nh\nm\np", "", "", "", ""]);
///
/// let scored = score_words(words.iter(), &constraints, &table);
/// assert_eq!(scored[0].word.text(), "guise");
/// assert_eq!(scored[0].score, 1);
/// assert_eq!(scored[1].score, 4);
/// ```
#[must_use]
pub fn score_words<'a, I>(
    words: I,
    constraints: &Constraints,
    frequencies: &FrequencyTable,
) -> Vec<ScoredWord>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut scored: Vec<ScoredWord> = words
        .into_iter()
        .map(|word| ScoredWord {
            word: word.clone(),
            score: word_score(word, constraints, frequencies),
        })
        .collect();

    scored.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.word.cmp(&b.word)));
    scored
}

/// Words with the highest vowel count
///
/// Non-empty whenever `words` is non-empty. Order follows the input.
#[must_use]
pub fn most_vowels(words: &[Word]) -> Vec<Word> {
    let Some(max) = words.iter().map(Word::vowel_count).max() else {
        return Vec::new();
    };
    words
        .iter()
        .filter(|word| word.vowel_count() == max)
        .cloned()
        .collect()
}

/// Split into words with all-distinct letters and words with a repeat
#[must_use]
pub fn split_by_uniqueness(words: &[Word]) -> (Vec<Word>, Vec<Word>) {
    words.iter().cloned().partition(Word::has_unique_letters)
}

/// Rank the vowel-richest candidates by frequency score
///
/// Returns every scored word, not just the best one, so callers can choose
/// among ties.
#[must_use]
pub fn suggest(
    candidates: &[Word],
    constraints: &Constraints,
    frequencies: &FrequencyTable,
) -> Suggestion {
    if candidates.is_empty() {
        return Suggestion::Default(DEFAULT_FIRST_GUESS);
    }

    let mut pool = most_vowels(candidates);
    if pool.is_empty() {
        pool = candidates.to_vec();
    }

    Suggestion::Ranked(score_words(pool.iter(), constraints, frequencies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_green;
    use crate::wordlists::words_from_slice;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list).iter().cloned().collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn green(s: &str) -> Constraints {
        Constraints {
            green: parse_green(s),
            ..Constraints::default()
        }
    }

    #[test]
    fn scenario_c_scores_by_first_position_rank() {
        let candidates = words(&["poise", "moise", "hoise", "guise"]);
        let table = FrequencyTable::from_contents(["g\nh\nm\np\ns", "", "", "", ""]);

        let scored = score_words(candidates.iter(), &green(".OISE"), &table);
        let pairs: Vec<(&str, usize)> = scored.iter().map(|s| (s.word.text(), s.score)).collect();
        assert_eq!(
            pairs,
            [("guise", 1), ("hoise", 2), ("moise", 3), ("poise", 4)]
        );
    }

    #[test]
    fn missing_letter_costs_the_penalty() {
        let table = FrequencyTable::from_contents(["s", "a", "i", "n", "t"]);
        let word = Word::new("saint").unwrap();
        assert_eq!(word_score(&word, &Constraints::default(), &table), 5);

        let word = Word::new("slant").unwrap();
        // l at 2 and a at 3 are unlisted
        assert_eq!(
            word_score(&word, &Constraints::default(), &table),
            1 + PENALTY_SCORE + PENALTY_SCORE + 1 + 1
        );
    }

    #[test]
    fn all_positions_fixed_scores_zero() {
        let table = FrequencyTable::from_contents(["s", "a", "i", "n", "t"]);
        let scored = score_words(words(&["slant"]).iter(), &green("SLANT"), &table);
        assert_eq!(scored[0].score, 0);
    }

    #[test]
    fn ties_break_alphabetically() {
        let table = FrequencyTable::default();
        let scored = score_words(words(&["slant", "chant", "plant"]).iter(), &green("...NT"), &table);
        assert!(scored.iter().all(|s| s.score == 3 * PENALTY_SCORE));
        let order: Vec<&str> = scored.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, ["chant", "plant", "slant"]);
    }

    #[test]
    fn score_is_monotonic_in_rank() {
        let table = FrequencyTable::from_contents(["s\nc\np\ng", "l\nh\nr", "a", "n", "t"]);
        let constraints = green("..ANT");
        let base = Word::new("grant").unwrap();
        let base_score = word_score(&base, &constraints, &table);

        // Each swaps one open letter for a more frequent one
        for better in ["prant", "crant", "srant", "ghant", "glant"] {
            let word = Word::new(better).unwrap();
            assert!(word_score(&word, &constraints, &table) <= base_score, "{better}");
        }
    }

    #[test]
    fn most_vowels_keeps_only_the_maximum() {
        let candidates = words(&["audio", "adieu", "slant", "guise"]);
        let best = most_vowels(&candidates);
        assert_eq!(texts(&best), ["adieu", "audio"]);
        assert!(best.iter().all(|w| w.vowel_count() == 4));
    }

    #[test]
    fn most_vowels_non_empty_for_non_empty_input() {
        let candidates = words(&["crypt", "nymph"]);
        assert_eq!(most_vowels(&candidates).len(), 2);
        assert!(most_vowels(&[]).is_empty());
    }

    #[test]
    fn scenario_b_split_by_uniqueness() {
        let candidates = words(&["brisk", "briss", "saint", "slant", "hello", "plant"]);
        let (unique, repeated) = split_by_uniqueness(&candidates);
        assert_eq!(texts(&unique), ["brisk", "plant", "saint", "slant"]);
        assert_eq!(texts(&repeated), ["briss", "hello"]);
    }

    #[test]
    fn suggest_defaults_without_candidates() {
        let suggestion = suggest(&[], &Constraints::default(), &FrequencyTable::default());
        assert_eq!(suggestion, Suggestion::Default("SAINT"));
        assert!(suggestion.ranked().is_empty());
        assert_eq!(suggestion.best(), "SAINT");
    }

    #[test]
    fn suggest_ranks_vowel_rich_candidates_only() {
        let candidates = words(&["guise", "poise", "noise", "plant"]);
        let table = FrequencyTable::from_contents(["n\ng\np", "", "", "", ""]);
        let suggestion = suggest(&candidates, &green(".OISE"), &table);

        let ranked: Vec<(&str, usize)> = suggestion
            .ranked()
            .iter()
            .map(|s| (s.word.text(), s.score))
            .collect();
        // guise has three vowels too (u, i, e); plant has one and is dropped
        assert_eq!(ranked, [("noise", 1), ("guise", 2), ("poise", 3)]);
        assert_eq!(suggestion.best(), "NOISE");
    }
}
