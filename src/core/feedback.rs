//! Validation of user-entered feedback
//!
//! Every check happens here, before any constraint is merged, so a rejected
//! round leaves session state untouched.

use super::constraints::{Constraints, GreyConstraints, parse_green, parse_grey, parse_yellow};
use super::word::{WORD_LENGTH, Word};
use thiserror::Error;

/// Malformed guess or feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Guess cannot be empty")]
    EmptyGuess,
    #[error("Guess must be exactly {WORD_LENGTH} letters (got {0})")]
    GuessLength(usize),
    #[error("Guess must contain only letters")]
    GuessCharacters,
    #[error("{0} feedback cannot be empty")]
    EmptyFeedback(FeedbackKind),
    #[error("{kind} must be exactly {WORD_LENGTH} characters (got {len})")]
    FeedbackLength { kind: FeedbackKind, len: usize },
    #[error("{0} must contain only letters and dots")]
    FeedbackCharacters(FeedbackKind),
    #[error("Grey letters must contain only letters and spaces")]
    GreyCharacters,
    #[error("Each grey letter must be a single alphabetic character (got '{0}')")]
    GreyToken(String),
}

/// Which dot-string a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Greens,
    Yellows,
}

impl std::fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greens => write!(f, "Greens"),
            Self::Yellows => write!(f, "Yellows"),
        }
    }
}

/// Check a guess is exactly five letters
///
/// # Errors
/// Returns `FeedbackError` naming the expected format.
pub fn validate_guess(guess: &str) -> Result<Word, FeedbackError> {
    if guess.is_empty() {
        return Err(FeedbackError::EmptyGuess);
    }
    let len = guess.chars().count();
    if len != WORD_LENGTH {
        return Err(FeedbackError::GuessLength(len));
    }
    if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FeedbackError::GuessCharacters);
    }
    Word::new(guess).map_err(|_| FeedbackError::GuessCharacters)
}

/// Check a green or yellow dot-string: five characters, letters or '.'
///
/// # Errors
/// Returns `FeedbackError` naming the expected format.
pub fn validate_dot_string(s: &str, kind: FeedbackKind) -> Result<(), FeedbackError> {
    if s.is_empty() {
        return Err(FeedbackError::EmptyFeedback(kind));
    }
    let len = s.chars().count();
    if len != WORD_LENGTH {
        return Err(FeedbackError::FeedbackLength { kind, len });
    }
    if !s.chars().all(|c| c.is_ascii_alphabetic() || c == '.') {
        return Err(FeedbackError::FeedbackCharacters(kind));
    }
    Ok(())
}

/// Check a list of grey letters: each a single alphabetic character
///
/// # Errors
/// Returns `FeedbackError::GreyToken` for the first bad entry.
pub fn validate_grey_letters<S: AsRef<str>>(greys: &[S]) -> Result<(), FeedbackError> {
    for grey in greys {
        let grey = grey.as_ref();
        let mut chars = grey.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {}
            _ => return Err(FeedbackError::GreyToken(grey.to_string())),
        }
    }
    Ok(())
}

/// Check a space-separated grey line as typed at a prompt; empty is allowed
///
/// # Errors
/// Returns `FeedbackError` for non-letter characters or multi-letter tokens.
pub fn validate_grey_input(input: &str) -> Result<Vec<&str>, FeedbackError> {
    if !input
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(FeedbackError::GreyCharacters);
    }
    let tokens: Vec<&str> = input.split_whitespace().collect();
    validate_grey_letters(&tokens)?;
    Ok(tokens)
}

/// One round of validated feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub guess: Word,
    pub constraints: Constraints,
}

impl Feedback {
    /// Validate every field, then parse into constraints
    ///
    /// # Errors
    /// Returns the first `FeedbackError` encountered; nothing is parsed on failure.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Feedback;
    ///
    /// let feedback = Feedback::parse("saint", "..i..", "s....", &["a", "n", "t"]).unwrap();
    /// assert_eq!(feedback.constraints.green.get(3), Some(b'I'));
    /// assert!(feedback.constraints.grey.contains(b'n'));
    ///
    /// assert!(Feedback::parse("saint", "..i.", ".....", &[] as &[&str]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(
        guess: &str,
        greens: &str,
        yellows: &str,
        greys: &[S],
    ) -> Result<Self, FeedbackError> {
        let guess = validate_guess(guess)?;
        validate_dot_string(greens, FeedbackKind::Greens)?;
        validate_dot_string(yellows, FeedbackKind::Yellows)?;
        validate_grey_letters(greys)?;

        let mut grey = GreyConstraints::default();
        for letter in greys {
            grey.union(&parse_grey(letter.as_ref()));
        }

        Ok(Self {
            guess,
            constraints: Constraints {
                green: parse_green(greens),
                yellow: parse_yellow(yellows),
                grey,
            },
        })
    }
}
