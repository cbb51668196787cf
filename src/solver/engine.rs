//! Main solver interface

use super::filter::filter_candidates;
use super::scoring::{DEFAULT_FIRST_GUESS, ScoredWord, Suggestion, suggest};
use crate::config::SolverConfig;
use crate::core::{Constraints, Word};
use crate::wordlists::{Dictionary, FrequencyTable, LoadError};

/// Read-only data the solver works from
///
/// Holds no per-session state; every query takes the constraints it should
/// apply, so one `Solver` can serve any number of sessions.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    dictionary: Dictionary,
    frequencies: FrequencyTable,
}

/// Candidates and suggestion for one set of constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Consistent words, alphabetical
    pub candidates: Vec<Word>,
    pub suggestion: Suggestion,
}

impl RoundResult {
    /// Ranked suggestions, empty when the default guess applies
    #[must_use]
    pub fn suggestions(&self) -> &[ScoredWord] {
        self.suggestion.ranked()
    }
}

impl Solver {
    #[must_use]
    pub const fn new(dictionary: Dictionary, frequencies: FrequencyTable) -> Self {
        Self {
            dictionary,
            frequencies,
        }
    }

    /// Load the word list and frequency files named by `config`
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a data file exists but cannot be read.
    pub fn load(config: &SolverConfig) -> Result<Self, LoadError> {
        let frequencies = FrequencyTable::load(config.frequency_dir())?;
        let dictionary = Dictionary::load(config.words_file())?;
        if dictionary.is_empty() {
            log::warn!("Word list is empty; only the default guess can be suggested");
        }
        Ok(Self::new(dictionary, frequencies))
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Opening word suggested before any feedback
    #[must_use]
    pub const fn first_guess(&self) -> &'static str {
        DEFAULT_FIRST_GUESS
    }

    /// Filter and rank for the given constraints
    ///
    /// Pure with respect to `self`: identical constraints always give an
    /// identical result.
    #[must_use]
    pub fn evaluate(&self, constraints: &Constraints) -> RoundResult {
        let candidates = filter_candidates(&self.dictionary, constraints, &self.frequencies);
        let suggestion = suggest(&candidates, constraints, &self.frequencies);
        RoundResult {
            candidates,
            suggestion,
        }
    }
}
