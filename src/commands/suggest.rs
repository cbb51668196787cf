//! One-shot feedback round from the command line

use super::serve::Response;
use crate::output::print_round_result;
use crate::solver::{RoundResult, Session, Solver};
use anyhow::{Context, Result};

/// Feedback for a single round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestRequest {
    pub guess: String,
    pub greens: String,
    pub yellows: String,
    pub greys: Vec<String>,
}

impl SuggestRequest {
    /// Grey letters may be given as separate values or space-separated in one
    fn grey_letters(&self) -> Vec<&str> {
        self.greys
            .iter()
            .flat_map(|entry| entry.split_whitespace())
            .collect()
    }
}

/// Apply one round of feedback to a fresh session
///
/// # Errors
///
/// Returns an error naming the malformed field if validation fails.
pub fn suggest_once(solver: &Solver, request: &SuggestRequest) -> Result<RoundResult> {
    let mut session = Session::new();
    let result = session
        .process_feedback(
            solver,
            &request.guess,
            &request.greens,
            &request.yellows,
            &request.grey_letters(),
        )
        .with_context(|| format!("Invalid feedback for guess '{}'", request.guess))?;
    Ok(result)
}

/// Run the round and print it as text or as the adapter's JSON response
///
/// # Errors
///
/// Returns an error if validation fails or the JSON cannot be encoded.
pub fn run_suggest(solver: &Solver, request: &SuggestRequest, json: bool) -> Result<()> {
    let result = suggest_once(solver, request)?;
    if json {
        let response = Response::from(result);
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("Failed to encode response")?
        );
    } else {
        print_round_result(&result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{FrequencyTable, words_from_slice};

    fn solver() -> Solver {
        Solver::new(
            words_from_slice(&["saint", "guise", "poise", "noise"]),
            FrequencyTable::default(),
        )
    }

    fn request(greys: &[&str]) -> SuggestRequest {
        SuggestRequest {
            guess: "saint".to_string(),
            greens: "..i..".to_string(),
            yellows: "s....".to_string(),
            greys: greys.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn grey_letters_accept_both_forms() {
        let separate = suggest_once(&solver(), &request(&["a", "n", "t"])).unwrap();
        let joined = suggest_once(&solver(), &request(&["a n t"])).unwrap();
        assert_eq!(separate, joined);

        let words: Vec<&str> = separate.candidates.iter().map(Word::text).collect();
        assert_eq!(words, ["guise", "poise"]);
    }

    #[test]
    fn invalid_feedback_names_the_guess() {
        let mut bad = request(&[]);
        bad.greens = "..i".to_string();
        let err = suggest_once(&solver(), &bad).unwrap_err();
        assert!(err.to_string().contains("'saint'"));
        assert_eq!(
            err.root_cause().to_string(),
            "Greens must be exactly 5 characters (got 3)"
        );
    }
}
