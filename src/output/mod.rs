//! Terminal output formatting
//!
//! Display utilities for console rounds and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    CandidateSection, candidate_sections, print_candidates, print_goodbye, print_invalid,
    print_round_header, print_round_result, print_solved, print_suggestion, print_welcome,
};
