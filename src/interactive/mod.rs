//! Interactive solving
//!
//! `Flow` is the prompt state machine; the console loop and the terminal UI
//! both drive it one line at a time.

mod app;
mod flow;
mod rendering;

pub use app::{App, InputMode, run_tui};
pub use flow::{Flow, Outcome, Prompt, QUIT_COMMAND};
