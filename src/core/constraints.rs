//! Accumulated green/yellow/grey feedback
//!
//! Letters are stored uppercase, the way feedback is entered; words are
//! lowercase, so every comparison against a word goes through
//! `to_ascii_lowercase`. Positions are 1-indexed throughout.

use super::word::WORD_LENGTH;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Letters confirmed at exact positions
///
/// At most one letter per position. Later assignments overwrite earlier ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreenConstraints([Option<u8>; WORD_LENGTH]);

impl GreenConstraints {
    /// Required letter at a 1-indexed position, if any
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        position
            .checked_sub(1)
            .and_then(|i| self.0.get(i).copied().flatten())
    }

    /// Fix `letter` at a 1-indexed position. Out-of-range positions are ignored.
    pub fn set(&mut self, position: usize, letter: u8) {
        if let Some(slot) = position.checked_sub(1).and_then(|i| self.0.get_mut(i)) {
            *slot = Some(letter.to_ascii_uppercase());
        }
    }

    /// True if a letter is fixed at this position
    #[must_use]
    pub fn is_fixed(&self, position: usize) -> bool {
        self.get(position).is_some()
    }

    /// Iterate `(position, letter)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|letter| (i + 1, letter)))
    }

    /// Positions with no fixed letter, ascending
    #[must_use]
    pub fn unfixed_positions(&self) -> Vec<usize> {
        (1..=WORD_LENGTH).filter(|&pos| !self.is_fixed(pos)).collect()
    }

    /// Number of fixed positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once every position is fixed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == WORD_LENGTH
    }

    /// Overwrite/add every entry of `other`
    pub fn update(&mut self, other: &Self) {
        for (position, letter) in other.iter() {
            self.set(position, letter);
        }
    }

    /// Render back to dot notation, e.g. `S..NT`
    #[must_use]
    pub fn to_feedback_string(&self) -> String {
        self.0
            .iter()
            .map(|slot| slot.map_or('.', char::from))
            .collect()
    }
}

/// Letters known to be present, with the positions they are known NOT to occupy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YellowConstraints(FxHashMap<u8, FxHashSet<usize>>);

impl YellowConstraints {
    /// Record that `letter` is present but not at `position`
    pub fn exclude(&mut self, letter: u8, position: usize) {
        self.0
            .entry(letter.to_ascii_uppercase())
            .or_default()
            .insert(position);
    }

    /// Excluded positions for a letter
    #[must_use]
    pub fn excluded_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.0.get(&letter.to_ascii_uppercase())
    }

    /// Letters excluded from a given position, sorted
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> Vec<u8> {
        let mut letters: Vec<u8> = self
            .0
            .iter()
            .filter(|(_, positions)| positions.contains(&position))
            .map(|(&letter, _)| letter)
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Every yellow letter, sorted
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.0.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &FxHashSet<usize>)> {
        self.0.iter().map(|(&letter, positions)| (letter, positions))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Union excluded positions per letter
    pub fn union(&mut self, other: &Self) {
        for (letter, positions) in other.iter() {
            self.0.entry(letter).or_default().extend(positions);
        }
    }
}

/// Letters known to be absent from the word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreyConstraints(FxHashSet<u8>);

impl GreyConstraints {
    pub fn insert(&mut self, letter: u8) {
        self.0.insert(letter.to_ascii_uppercase());
    }

    /// Case-insensitive membership
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter.to_ascii_uppercase())
    }

    /// Every grey letter, sorted
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.0.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn union(&mut self, other: &Self) {
        self.0.extend(other.0.iter().copied());
    }
}

/// All feedback gathered so far in one solving session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub green: GreenConstraints,
    pub yellow: YellowConstraints,
    pub grey: GreyConstraints,
}

impl Constraints {
    /// Fold another round of feedback in: greens overwrite, yellows and greys union
    pub fn merge(&mut self, other: &Self) {
        self.green.update(&other.green);
        self.yellow.union(&other.yellow);
        self.grey.union(&other.grey);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty() && self.yellow.is_empty() && self.grey.is_empty()
    }

    /// True once every position is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.green.is_complete()
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yellows: Vec<String> = self
            .yellow
            .letters()
            .into_iter()
            .map(|letter| {
                let mut positions: Vec<usize> = self
                    .yellow
                    .excluded_positions(letter)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default();
                positions.sort_unstable();
                let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
                format!("{}∉{{{}}}", char::from(letter), positions.join(","))
            })
            .collect();
        let greys: String = self.grey.letters().into_iter().map(char::from).collect();

        write!(
            f,
            "green {} | yellow [{}] | grey [{}]",
            self.green.to_feedback_string(),
            yellows.join(" "),
            greys
        )
    }
}

/// Map each non-dot character to its 1-indexed position, uppercased
///
/// # Examples
/// ```
/// use wordle_helper::core::parse_green;
///
/// let green = parse_green("S..NT");
/// assert_eq!(green.get(1), Some(b'S'));
/// assert_eq!(green.get(2), None);
/// assert_eq!(green.to_feedback_string(), "S..NT");
/// ```
#[must_use]
pub fn parse_green(s: &str) -> GreenConstraints {
    let mut green = GreenConstraints::default();
    for (i, ch) in s.bytes().enumerate() {
        if ch != b'.' {
            green.set(i + 1, ch);
        }
    }
    green
}

/// Record each non-dot character as a letter excluded from that position
#[must_use]
pub fn parse_yellow(s: &str) -> YellowConstraints {
    let mut yellow = YellowConstraints::default();
    for (i, ch) in s.bytes().enumerate() {
        if ch != b'.' {
            yellow.exclude(ch, i + 1);
        }
    }
    yellow
}

/// Whitespace-separated letters, uppercased; empty input gives an empty set
#[must_use]
pub fn parse_grey(s: &str) -> GreyConstraints {
    let mut grey = GreyConstraints::default();
    for token in s.split_whitespace() {
        for ch in token.bytes() {
            grey.insert(ch);
        }
    }
    grey
}
