//! Prompt-driven feedback loop
//!
//! Shared by the console loop and the terminal UI. Callers feed one line of
//! input at a time and render whatever `Outcome` comes back; the flow owns
//! the session and decides which prompt comes next.

use crate::core::{
    Constraints, Feedback, FeedbackError, FeedbackKind, Word, parse_green, validate_dot_string,
    validate_grey_input, validate_guess,
};
use crate::solver::{RoundResult, Session, Solver};

/// Typed at any prompt to leave, case-insensitive
pub const QUIT_COMMAND: &str = "quit";

/// Yellow input used when the prompt is left blank
const NO_YELLOWS: &str = ".....";

/// Which piece of feedback the flow is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Guess,
    Green,
    Yellow,
    Grey,
}

impl Prompt {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Guess => "Enter your guess",
            Self::Green => {
                "Enter green letters feedback (use dots for unknown positions, e.g., 'S..NT')"
            }
            Self::Yellow => "Enter yellow letters feedback (use dots for positions, e.g., '.A...')",
            Self::Grey => "Enter grey letters (space-separated, e.g., 'E R T')",
        }
    }

    /// Short label for panel titles
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guess => "Guess",
            Self::Green => "Greens",
            Self::Yellow => "Yellows",
            Self::Grey => "Greys",
        }
    }
}

/// Result of feeding one line to the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input accepted, waiting on the given prompt
    Continue(Prompt),
    /// Input rejected; the prompt does not change
    Invalid(FeedbackError),
    /// A full round was applied
    Round(RoundResult),
    Solved,
    UserExited,
}

#[derive(Debug, Clone)]
enum Stage {
    Guess,
    Green {
        guess: Word,
    },
    Yellow {
        guess: Word,
        greens: String,
    },
    Grey {
        guess: Word,
        greens: String,
        yellows: String,
    },
    Solved,
    Exited,
}

/// Interactive solving state machine
#[derive(Debug, Clone)]
pub struct Flow {
    session: Session,
    stage: Stage,
    round: usize,
    history: Vec<Feedback>,
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}

impl Flow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            stage: Stage::Guess,
            round: 1,
            history: Vec::new(),
        }
    }

    /// Current prompt, `None` once the flow has finished
    #[must_use]
    pub const fn prompt(&self) -> Option<Prompt> {
        match self.stage {
            Stage::Guess => Some(Prompt::Guess),
            Stage::Green { .. } => Some(Prompt::Green),
            Stage::Yellow { .. } => Some(Prompt::Yellow),
            Stage::Grey { .. } => Some(Prompt::Grey),
            Stage::Solved | Stage::Exited => None,
        }
    }

    /// Round number shown to the user, starting at 1
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Feedback applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Guess entered for the round in progress
    #[must_use]
    pub const fn pending_guess(&self) -> Option<&Word> {
        match &self.stage {
            Stage::Green { guess } | Stage::Yellow { guess, .. } | Stage::Grey { guess, .. } => {
                Some(guess)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.stage, Stage::Solved)
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Solved | Stage::Exited)
    }

    /// Give up the current puzzle and start from round 1
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Handle one line of input for the current prompt
    ///
    /// Once the flow is solved or exited it stays that way; further input
    /// returns the same terminal outcome.
    pub fn submit(&mut self, solver: &Solver, input: &str) -> Outcome {
        match self.stage {
            Stage::Solved => return Outcome::Solved,
            Stage::Exited => return Outcome::UserExited,
            _ => {}
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case(QUIT_COMMAND) {
            log::debug!("Quit requested in round {}", self.round);
            self.stage = Stage::Exited;
            return Outcome::UserExited;
        }

        self.step(solver, input).unwrap_or_else(Outcome::Invalid)
    }

    fn step(&mut self, solver: &Solver, input: &str) -> Result<Outcome, FeedbackError> {
        let next = match &self.stage {
            Stage::Guess => Stage::Green {
                guess: validate_guess(input)?,
            },
            Stage::Green { guess } => {
                validate_dot_string(input, FeedbackKind::Greens)?;
                let green = parse_green(input);
                let mut merged = self.session.constraints().green;
                merged.update(&green);

                if merged.is_complete() {
                    let feedback = Feedback {
                        guess: guess.clone(),
                        constraints: Constraints {
                            green,
                            ..Constraints::default()
                        },
                    };
                    self.session.apply(solver, &feedback);
                    self.history.push(feedback);
                    log::info!("Solved in round {}", self.round);
                    Stage::Solved
                } else {
                    Stage::Yellow {
                        guess: guess.clone(),
                        greens: input.to_string(),
                    }
                }
            }
            Stage::Yellow { guess, greens } => {
                let yellows = if input.is_empty() {
                    NO_YELLOWS.to_string()
                } else {
                    validate_dot_string(input, FeedbackKind::Yellows)?;
                    input.to_string()
                };
                Stage::Grey {
                    guess: guess.clone(),
                    greens: greens.clone(),
                    yellows,
                }
            }
            Stage::Grey {
                guess,
                greens,
                yellows,
            } => {
                let greys = validate_grey_input(input)?;
                let feedback = Feedback::parse(guess.text(), greens, yellows, &greys)?;
                let result = self.session.apply(solver, &feedback);
                self.history.push(feedback);
                self.round += 1;
                self.stage = Stage::Guess;
                return Ok(Outcome::Round(result));
            }
            Stage::Solved => return Ok(Outcome::Solved),
            Stage::Exited => return Ok(Outcome::UserExited),
        };

        self.stage = next;
        Ok(self.prompt().map_or(Outcome::Solved, Outcome::Continue))
    }
}
