//! Wordle Helper
//!
//! Narrows a dictionary to the words consistent with Wordle feedback and
//! ranks them by positional letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::solver::{Session, Solver};
//! use wordle_helper::wordlists::{FrequencyTable, words_from_slice};
//!
//! let solver = Solver::new(
//!     words_from_slice(&["saint", "slant", "plant"]),
//!     FrequencyTable::from_contents(["p\ns", "l", "a", "n", "t"]),
//! );
//! let mut session = Session::new();
//!
//! let result = session
//!     .process_feedback(&solver, "saint", "...NT", ".....", &["i"])
//!     .unwrap();
//! assert_eq!(result.suggestion.best(), "PLANT");
//! ```

// Data file locations
pub mod config;

// Core domain types
pub mod core;

// Filtering and scoring
pub mod solver;

// Word list and frequency data
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive prompt loop and TUI
pub mod interactive;
