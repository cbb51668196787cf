//! Command implementations

pub mod serve;
pub mod simple;
pub mod suggest;

pub use serve::{Request, Response, Server, SuggestionEntry, run_serve};
pub use simple::{run_simple, run_simple_with};
pub use suggest::{SuggestRequest, run_suggest, suggest_once};
