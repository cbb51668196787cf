//! Per-session solving state
//!
//! A `Session` owns the constraints accumulated so far and the latest
//! candidate set. Callers keep one per logical session; nothing is shared.

use super::engine::{RoundResult, Solver};
use crate::core::{Constraints, Feedback, FeedbackError, Word};

/// Accumulated feedback for one puzzle
#[derive(Debug, Clone, Default)]
pub struct Session {
    constraints: Constraints,
    candidates: Vec<Word>,
    guesses: Vec<Word>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Candidates from the most recent round
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Guesses applied so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Number of rounds applied
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.constraints.is_solved()
    }

    /// Merge already-validated feedback, then filter and rank
    pub fn apply(&mut self, solver: &Solver, feedback: &Feedback) -> RoundResult {
        self.constraints.merge(&feedback.constraints);
        self.guesses.push(feedback.guess.clone());
        log::debug!(
            "Round {} ({}): {}",
            self.rounds(),
            feedback.guess,
            self.constraints
        );

        let result = solver.evaluate(&self.constraints);
        self.candidates.clone_from(&result.candidates);
        result
    }

    /// Validate one round of feedback, merge it, filter and rank
    ///
    /// Validation happens before anything is merged, so an error leaves the
    /// session exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` describing the first malformed field.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::solver::{Session, Solver};
    /// use wordle_helper::wordlists::{FrequencyTable, words_from_slice};
    ///
    /// let solver = Solver::new(
    ///     words_from_slice(&["saint", "guise", "poise", "noise"]),
    ///     FrequencyTable::default(),
    /// );
    /// let mut session = Session::new();
    ///
    /// let result = session
    ///     .process_feedback(&solver, "saint", "..i..", "s....", &["a", "n", "t"])
    ///     .unwrap();
    /// assert_eq!(result.candidates.len(), 2);
    ///
    /// assert!(session.process_feedback(&solver, "sain", ".....", ".....", &[] as &[&str]).is_err());
    /// assert_eq!(session.rounds(), 1);
    /// ```
    pub fn process_feedback<S: AsRef<str>>(
        &mut self,
        solver: &Solver,
        guess: &str,
        greens: &str,
        yellows: &str,
        greys: &[S],
    ) -> Result<RoundResult, FeedbackError> {
        let feedback = Feedback::parse(guess, greens, yellows, greys)?;
        Ok(self.apply(solver, &feedback))
    }

    /// Forget all feedback
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
