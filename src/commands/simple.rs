//! Simple interactive CLI mode
//!
//! Text-based prompt loop without TUI

use crate::interactive::{Flow, Outcome};
use crate::output::{
    print_goodbye, print_invalid, print_round_header, print_round_result, print_solved,
    print_welcome,
};
use crate::solver::Solver;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the prompt loop on stdin
///
/// Returns `true` if the puzzle was solved, `false` if the user quit or the
/// input ended.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver) -> Result<bool> {
    let stdin = io::stdin();
    run_simple_with(solver, stdin.lock())
}

/// Run the prompt loop on any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_simple_with<R: BufRead>(solver: &Solver, mut input: R) -> Result<bool> {
    print_welcome(solver.first_guess());

    let mut flow = Flow::new();
    print_round_header(flow.round());

    while let Some(prompt) = flow.prompt() {
        let Some(line) = get_user_input(&mut input, prompt.text())? else {
            log::debug!("Input closed at {} prompt", prompt.label());
            print_goodbye();
            return Ok(false);
        };

        match flow.submit(solver, &line) {
            Outcome::Continue(_) => {}
            Outcome::Invalid(error) => print_invalid(&error),
            Outcome::Round(result) => {
                print_round_result(&result);
                print_round_header(flow.round());
            }
            Outcome::Solved => {
                print_solved(flow.history());
                return Ok(true);
            }
            Outcome::UserExited => {
                print_goodbye();
                return Ok(false);
            }
        }
    }

    Ok(flow.is_solved())
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{FrequencyTable, words_from_slice};

    fn solver() -> Solver {
        Solver::new(
            words_from_slice(&["saint", "slant", "plant", "chant", "grant", "crane"]),
            FrequencyTable::default(),
        )
    }

    #[test]
    fn all_green_ends_solved() {
        let input = "saint\nS....\n.A...\nE R\nslant\nSLANT\n";
        assert!(run_simple_with(&solver(), input.as_bytes()).unwrap());
    }

    #[test]
    fn quit_ends_unsolved() {
        let input = "saint\nQUIT\n";
        assert!(!run_simple_with(&solver(), input.as_bytes()).unwrap());
    }

    #[test]
    fn end_of_input_counts_as_exit() {
        let input = "saint\n.....\n";
        assert!(!run_simple_with(&solver(), input.as_bytes()).unwrap());
        assert!(!run_simple_with(&solver(), "".as_bytes()).unwrap());
    }

    #[test]
    fn invalid_lines_are_retried() {
        let input = "sain\nsaint\nS..\nSAINT\n";
        assert!(run_simple_with(&solver(), input.as_bytes()).unwrap());
    }
}
