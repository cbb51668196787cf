//! Filtering and ranking
//!
//! The engine is pure: constraints go in, candidates and ranked suggestions
//! come out. `Session` is the only place that holds mutable state.

mod engine;
pub mod filter;
pub mod scoring;
mod session;

pub use engine::{RoundResult, Solver};
pub use filter::{expand_candidates, filter_candidates, strict_candidates};
pub use scoring::{
    DEFAULT_FIRST_GUESS, PENALTY_SCORE, ScoredWord, Suggestion, most_vowels, score_words,
    split_by_uniqueness, suggest,
};
pub use session::Session;
