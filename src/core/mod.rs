//! Core domain types for the helper
//!
//! Words, accumulated constraints and feedback validation. Everything here is
//! pure and has no I/O.

mod constraints;
mod feedback;
mod word;

pub use constraints::{
    Constraints, GreenConstraints, GreyConstraints, YellowConstraints, parse_green, parse_grey,
    parse_yellow,
};
pub use feedback::{
    Feedback, FeedbackError, FeedbackKind, validate_dot_string, validate_grey_input,
    validate_grey_letters, validate_guess,
};
pub use word::{VOWELS, WORD_LENGTH, Word, WordError};
