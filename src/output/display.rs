//! Console display of rounds and session events

use super::formatters::{feedback_tiles, suggestion_line, word_rows};
use crate::core::{Feedback, FeedbackError, Word};
use crate::solver::{RoundResult, Suggestion, split_by_uniqueness};
use colored::Colorize;

/// One titled group of candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSection {
    pub title: &'static str,
    pub rows: Vec<String>,
    pub count: usize,
}

/// Candidates split into unique-letter and repeated-letter sections
///
/// Empty sections are left out.
#[must_use]
pub fn candidate_sections(candidates: &[Word]) -> Vec<CandidateSection> {
    let (unique, repeated) = split_by_uniqueness(candidates);
    [
        ("Section 1 - Unique letters", unique),
        ("Section 2 - Repeated letters", repeated),
    ]
    .into_iter()
    .filter(|(_, words)| !words.is_empty())
    .map(|(title, words)| CandidateSection {
        title,
        rows: word_rows(&words),
        count: words.len(),
    })
    .collect()
}

/// Print the candidate listing for a round
pub fn print_candidates(candidates: &[Word]) {
    if candidates.is_empty() {
        println!("{}", "No candidate words found.".red());
        return;
    }

    println!("\nFound {} candidate word(s):", candidates.len());
    for section in candidate_sections(candidates) {
        println!(
            "\n{} ({} word(s)):",
            section.title.bright_cyan().bold(),
            section.count
        );
        for row in &section.rows {
            println!("  {row}");
        }
    }
}

/// Print the ranked suggestions, or the default guess
pub fn print_suggestion(suggestion: &Suggestion) {
    match suggestion {
        Suggestion::Default(word) => {
            println!("\nSuggested next guess: {}", word.bright_yellow().bold());
        }
        Suggestion::Ranked(words) => {
            println!("\n{}", "Suggested next guess:".bright_cyan().bold());
            for scored in words {
                println!("  {}", suggestion_line(scored).bright_yellow());
            }
        }
    }
}

/// Print candidates followed by suggestions
pub fn print_round_result(result: &RoundResult) {
    print_candidates(&result.candidates);
    print_suggestion(&result.suggestion);
}

pub fn print_welcome(first_guess: &str) {
    println!("{}", "Welcome to Wordle Solver!".bright_cyan().bold());
    println!("Enter 'quit' at any time to exit.\n");
    println!("Suggested first guess: {}\n", first_guess.bright_yellow().bold());
}

pub fn print_round_header(round: usize) {
    println!("\n{}", format!("--- Round {round} ---").cyan());
}

/// Validation failure at a prompt
pub fn print_invalid(error: &FeedbackError) {
    println!("{}", format!("Error: {error}.").red());
    println!("Please try again.");
}

/// Celebration with the feedback history
pub fn print_solved(history: &[Feedback]) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!("{}", "🎉 Congratulations! Puzzle solved!".bright_green().bold());
    println!("{}", "═".repeat(50).bright_cyan());

    let rounds = history.len();
    println!(
        "\n  Solved in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    );
    for (i, feedback) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            feedback.guess.text().to_uppercase().bright_white().bold(),
            feedback_tiles(feedback)
        );
    }
    println!();
}

pub fn print_goodbye() {
    println!("\nExiting Wordle Solver. Goodbye!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list).iter().cloned().collect()
    }

    #[test]
    fn sections_split_by_repeated_letters() {
        let sections =
            candidate_sections(&words(&["brisk", "briss", "saint", "slant", "hello", "plant"]));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Section 1 - Unique letters");
        assert_eq!(sections[0].count, 4);
        assert_eq!(sections[0].rows, ["BRISK PLANT SAINT SLANT"]);
        assert_eq!(sections[1].rows, ["BRISS HELLO"]);
    }

    #[test]
    fn empty_sections_are_skipped() {
        let sections = candidate_sections(&words(&["hello"]));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Section 2 - Repeated letters");
        assert!(candidate_sections(&[]).is_empty());
    }
}
