//! Candidate filtering
//!
//! Constraints become one rule per position, checked directly against each
//! word's letters. When nothing in the dictionary survives, a bounded search
//! guided by the frequency table proposes candidates instead.

use crate::core::{Constraints, GreyConstraints, WORD_LENGTH, Word, YellowConstraints};
use crate::wordlists::{Dictionary, FrequencyTable};
use std::collections::BTreeSet;

/// Stop the fallback search after this many accepted words
pub const MAX_EXPANDED_CANDIDATES: usize = 10;

/// Letters tried at the first open position when several positions are open
pub const MAX_LETTERS_PER_POSITION_FOR_EXPANSION: usize = 5;

/// What a single position accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionRule {
    /// Exactly this letter (lowercase)
    Exact(u8),
    /// Any letter except these (lowercase, sorted)
    Excluding(Vec<u8>),
    /// Any letter
    Any,
}

impl PositionRule {
    #[must_use]
    pub fn matches(&self, ch: u8) -> bool {
        match self {
            Self::Exact(letter) => ch == *letter,
            Self::Excluding(letters) => ch.is_ascii_lowercase() && !letters.contains(&ch),
            Self::Any => ch.is_ascii_lowercase(),
        }
    }
}

/// Rules for every position
pub type PositionRules = [PositionRule; WORD_LENGTH];

/// Build the per-position rules from green and yellow constraints
///
/// Green positions get an exact letter. Positions named in some yellow
/// letter's excluded set, and not green, exclude those letters.
#[must_use]
pub fn position_rules(constraints: &Constraints) -> PositionRules {
    std::array::from_fn(|i| {
        let position = i + 1;
        if let Some(letter) = constraints.green.get(position) {
            return PositionRule::Exact(letter.to_ascii_lowercase());
        }
        let excluded: Vec<u8> = constraints
            .yellow
            .excluded_at(position)
            .into_iter()
            .map(|letter| letter.to_ascii_lowercase())
            .collect();
        if excluded.is_empty() {
            PositionRule::Any
        } else {
            PositionRule::Excluding(excluded)
        }
    })
}

/// Full-word match against every positional rule
#[must_use]
pub fn matches_rules(word: &Word, rules: &PositionRules) -> bool {
    word.chars()
        .iter()
        .zip(rules.iter())
        .all(|(&ch, rule)| rule.matches(ch))
}

/// True when the word contains no grey letter
#[must_use]
pub fn avoids_grey(word: &Word, grey: &GreyConstraints) -> bool {
    !word.chars().iter().any(|&ch| grey.contains(ch))
}

/// Every yellow letter appears somewhere in the word
#[must_use]
pub fn contains_yellow(word: &Word, yellow: &YellowConstraints) -> bool {
    yellow.letters().into_iter().all(|letter| word.has_letter(letter))
}

/// Every yellow letter is present and never sits at one of its excluded positions
#[must_use]
pub fn satisfies_yellow(word: &Word, yellow: &YellowConstraints) -> bool {
    yellow.iter().all(|(letter, excluded)| {
        let letter = letter.to_ascii_lowercase();
        word.has_letter(letter)
            && excluded
                .iter()
                .all(|&pos| (1..=WORD_LENGTH).contains(&pos) && word.char_at(pos) != letter)
    })
}

/// Strict filtering: grey exclusion, positional rules, yellow presence
///
/// Returns words in alphabetical order.
#[must_use]
pub fn strict_candidates(dictionary: &Dictionary, constraints: &Constraints) -> Vec<Word> {
    let rules = position_rules(constraints);

    dictionary
        .iter()
        .filter(|word| avoids_grey(word, &constraints.grey))
        .filter(|word| matches_rules(word, &rules))
        .filter(|word| contains_yellow(word, &constraints.yellow))
        .cloned()
        .collect()
}

/// Filter the dictionary, falling back to the frequency-guided expansion
/// when no word survives
///
/// # Examples
/// ```
/// use wordle_helper::core::{Constraints, parse_green, parse_grey, parse_yellow};
/// use wordle_helper::solver::filter_candidates;
/// use wordle_helper::wordlists::{FrequencyTable, words_from_slice};
///
/// let dictionary = words_from_slice(&["saint", "slant", "plant", "chant", "grant", "crane"]);
/// let constraints = Constraints {
///     green: parse_green("S...."),
///     yellow: parse_yellow(".A..."),
///     grey: parse_grey("E R"),
/// };
///
/// let candidates = filter_candidates(&dictionary, &constraints, &FrequencyTable::default());
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "slant");
/// ```
#[must_use]
pub fn filter_candidates(
    dictionary: &Dictionary,
    constraints: &Constraints,
    frequencies: &FrequencyTable,
) -> Vec<Word> {
    let candidates = strict_candidates(dictionary, constraints);
    if !candidates.is_empty() {
        return candidates;
    }

    let expanded = expand_candidates(dictionary, constraints, frequencies);
    log::debug!(
        "No strict matches for {constraints}; expansion found {} candidate(s)",
        expanded.len()
    );
    expanded
}

/// Grey and yellow checks applied to every word the fallback proposes
fn valid_expansion(word: &Word, constraints: &Constraints) -> bool {
    avoids_grey(word, &constraints.grey) && satisfies_yellow(word, &constraints.yellow)
}

/// Propose candidates from frequency data when strict filtering finds nothing
///
/// This is a heuristic, not an exhaustive search: it favours high-frequency
/// letters and stops after `MAX_EXPANDED_CANDIDATES` accepted words.
#[must_use]
pub fn expand_candidates(
    dictionary: &Dictionary,
    constraints: &Constraints,
    frequencies: &FrequencyTable,
) -> Vec<Word> {
    if dictionary.is_empty() {
        return Vec::new();
    }

    let unfixed = constraints.green.unfixed_positions();
    let Some(&first_open) = unfixed.first() else {
        return Vec::new();
    };

    let base: [Option<u8>; WORD_LENGTH] = std::array::from_fn(|i| {
        constraints
            .green
            .get(i + 1)
            .map(|letter| letter.to_ascii_lowercase())
    });

    let open_letters = |position: usize| -> Vec<u8> {
        frequencies
            .letters(position)
            .iter()
            .copied()
            .filter(|&letter| !constraints.grey.contains(letter))
            .collect()
    };

    let mut accepted = BTreeSet::new();

    if unfixed.len() == 1 {
        for letter in open_letters(first_open) {
            let mut letters = base;
            letters[first_open - 1] = Some(letter);
            let Some(word) = complete_word(letters) else {
                continue;
            };
            if dictionary.contains(&word) && valid_expansion(&word, constraints) {
                accepted.insert(word);
                if accepted.len() >= MAX_EXPANDED_CANDIDATES {
                    break;
                }
            }
        }
    } else {
        for letter in open_letters(first_open)
            .into_iter()
            .take(MAX_LETTERS_PER_POSITION_FOR_EXPANSION)
        {
            let rules: PositionRules = std::array::from_fn(|i| {
                if i == first_open - 1 {
                    PositionRule::Exact(letter)
                } else {
                    base[i].map_or(PositionRule::Any, PositionRule::Exact)
                }
            });

            for word in dictionary.iter() {
                if matches_rules(word, &rules) && valid_expansion(word, constraints) {
                    accepted.insert(word.clone());
                    if accepted.len() >= MAX_EXPANDED_CANDIDATES {
                        break;
                    }
                }
            }
            if accepted.len() >= MAX_EXPANDED_CANDIDATES {
                break;
            }
        }
    }

    accepted.into_iter().collect()
}

fn complete_word(letters: [Option<u8>; WORD_LENGTH]) -> Option<Word> {
    let mut bytes = [0u8; WORD_LENGTH];
    for (slot, letter) in bytes.iter_mut().zip(letters) {
        *slot = letter?;
    }
    Word::from_letters(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_green, parse_grey, parse_yellow};
    use crate::wordlists::words_from_slice;

    fn constraints(green: &str, yellow: &str, grey: &str) -> Constraints {
        Constraints {
            green: parse_green(green),
            yellow: parse_yellow(yellow),
            grey: parse_grey(grey),
        }
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn scenario_dictionary() -> Dictionary {
        words_from_slice(&["saint", "slant", "plant", "chant", "grant", "crane"])
    }

    #[test]
    fn position_rules_from_constraints() {
        let rules = position_rules(&constraints("S....", ".A..A", ""));
        assert_eq!(rules[0], PositionRule::Exact(b's'));
        assert_eq!(rules[1], PositionRule::Excluding(vec![b'a']));
        assert_eq!(rules[2], PositionRule::Any);
        assert_eq!(rules[4], PositionRule::Excluding(vec![b'a']));
    }

    #[test]
    fn position_rules_green_wins_over_yellow_exclusion() {
        let rules = position_rules(&constraints("S....", "A....", ""));
        assert_eq!(rules[0], PositionRule::Exact(b's'));
    }

    #[test]
    fn position_rules_collect_several_letters() {
        let mut c = constraints(".....", "..A..", "");
        c.merge(&constraints(".....", "..T..", ""));
        assert_eq!(
            position_rules(&c)[2],
            PositionRule::Excluding(vec![b'a', b't'])
        );
    }

    #[test]
    fn rule_matching() {
        assert!(PositionRule::Exact(b's').matches(b's'));
        assert!(!PositionRule::Exact(b's').matches(b't'));
        assert!(PositionRule::Excluding(vec![b'a']).matches(b'b'));
        assert!(!PositionRule::Excluding(vec![b'a']).matches(b'a'));
        assert!(PositionRule::Any.matches(b'z'));
    }

    #[test]
    fn scenario_a_only_slant_survives() {
        let c = constraints("S....", ".A...", "E R");
        let candidates = filter_candidates(&scenario_dictionary(), &c, &FrequencyTable::default());
        assert_eq!(texts(&candidates), ["slant"]);
    }

    #[test]
    fn grey_letters_exclude_words() {
        let c = constraints(".....", ".....", "c");
        let candidates = strict_candidates(&scenario_dictionary(), &c);
        assert_eq!(texts(&candidates), ["grant", "plant", "saint", "slant"]);
    }

    #[test]
    fn yellow_letter_must_be_present() {
        let c = constraints(".....", "i....", "");
        let candidates = strict_candidates(&scenario_dictionary(), &c);
        assert_eq!(texts(&candidates), ["saint"]);
    }

    #[test]
    fn scenario_d_no_constraints_returns_whole_dictionary() {
        let dictionary = scenario_dictionary();
        let c = constraints(".....", ".....", "");
        assert!(c.is_empty());
        let candidates = filter_candidates(&dictionary, &c, &FrequencyTable::default());
        assert_eq!(candidates.len(), dictionary.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let dictionary = scenario_dictionary();
        let c = constraints("....T", ".A...", "E");
        let first = filter_candidates(&dictionary, &c, &FrequencyTable::default());
        let second = filter_candidates(&dictionary, &c, &FrequencyTable::default());
        assert_eq!(first, second);
    }

    #[test]
    fn strict_results_are_sound() {
        let dictionary = words_from_slice(&[
            "saint", "slant", "plant", "chant", "grant", "crane", "guise", "noise", "poise",
            "stare", "trace", "irate",
        ]);
        let cases = [
            constraints("S....", ".A...", "E R"),
            constraints("..I..", "S....", "A N T"),
            constraints(".....", "..A.T", "C"),
            constraints("....E", "R....", "S"),
        ];

        for c in &cases {
            for word in strict_candidates(&dictionary, c) {
                for (pos, letter) in c.green.iter() {
                    assert_eq!(word.char_at(pos), letter.to_ascii_lowercase(), "{word} vs {c}");
                }
                assert!(satisfies_yellow(&word, &c.yellow), "{word} vs {c}");
                assert!(avoids_grey(&word, &c.grey), "{word} vs {c}");
            }
        }
    }

    #[test]
    fn empty_dictionary_yields_nothing() {
        let c = constraints("S....", ".....", "");
        let table = FrequencyTable::from_contents(["s", "l\na", "a", "n", "t"]);
        assert!(filter_candidates(&Dictionary::default(), &c, &table).is_empty());
    }

    #[test]
    fn expansion_not_possible_when_every_position_is_fixed() {
        let dictionary = scenario_dictionary();
        let c = constraints("PLANK", ".....", "");
        let table = FrequencyTable::from_contents(["p", "l", "a", "n", "t\nk"]);
        assert!(expand_candidates(&dictionary, &c, &table).is_empty());
        assert!(filter_candidates(&dictionary, &c, &table).is_empty());
    }

    #[test]
    fn expansion_single_open_position_walks_frequency_order() {
        let dictionary = words_from_slice(&["plant", "plane", "plank", "place"]);
        let c = constraints("PLAN.", "....A", "E");
        let table = FrequencyTable::from_contents(["p", "l", "a", "n", "e\ny\na\nt\nr\nk"]);

        // e is grey; plany and plana are not words
        let expanded = expand_candidates(&dictionary, &c, &table);
        assert_eq!(texts(&expanded), ["plank", "plant"]);
    }

    #[test]
    fn expansion_skips_grey_letters() {
        let dictionary = words_from_slice(&["plane", "plank"]);
        let c = constraints("PLAN.", ".....", "E K");
        let table = FrequencyTable::from_contents(["", "", "", "", "e\nk"]);
        assert!(expand_candidates(&dictionary, &c, &table).is_empty());
    }

    #[test]
    fn expansion_multiple_open_positions_scans_dictionary() {
        let dictionary = scenario_dictionary();
        let c = constraints("....T", "X....", "");
        let table = FrequencyTable::from_contents(["g\np\ns\nc", "", "", "", ""]);

        assert!(strict_candidates(&dictionary, &c).is_empty());
        // Every proposal must still contain the yellow X, so nothing is accepted
        assert!(expand_candidates(&dictionary, &c, &table).is_empty());

        let c = constraints("....T", ".....", "R");
        let expanded = expand_candidates(&dictionary, &c, &table);
        // First open position is 1: tries g (grant has R, rejected), p, s, c in order
        assert_eq!(texts(&expanded), ["chant", "plant", "saint", "slant"]);
    }

    #[test]
    fn expansion_limits_letters_tried_at_first_open_position() {
        let dictionary = words_from_slice(&["zesty", "abbey"]);
        let c = constraints(".....", ".....", "");
        let table = FrequencyTable::from_contents(["a\nb\nc\nd\ne\nz", "", "", "", ""]);
        let expanded = expand_candidates(&dictionary, &c, &table);
        // Only the first five letters (a..e) are tried, so zesty is never reached
        assert_eq!(texts(&expanded), ["abbey"]);
    }

    #[test]
    fn expansion_caps_accepted_words() {
        let words: Vec<String> = (b'a'..=b'z').map(|c| format!("{}ount", char::from(c))).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let dictionary = words_from_slice(&refs);
        let c = constraints(".OUNT", ".....", "");
        let alphabet: String = (b'a'..=b'z').map(|c| format!("{}\n", char::from(c))).collect();
        let table = FrequencyTable::from_contents([alphabet.as_str(), "", "", "", ""]);

        let expanded = expand_candidates(&dictionary, &c, &table);
        assert_eq!(expanded.len(), MAX_EXPANDED_CANDIDATES);
        assert_eq!(expanded[0].text(), "aount");
    }
}
