//! JSON-lines tool adapter
//!
//! Reads one request object per line from the input and writes one response
//! object per line. Each session id owns its own `Session`; ids never share
//! constraints.

use crate::solver::{RoundResult, Session, Solver};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Session id used when a request leaves it out
pub const DEFAULT_SESSION: &str = "default";

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "wordle-solver-api";

fn default_session() -> String {
    DEFAULT_SESSION.to_string()
}

/// Incoming request, tagged by `op`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    ProcessFeedback {
        #[serde(default = "default_session")]
        session: String,
        guess: String,
        greens: String,
        yellows: String,
        #[serde(default)]
        greys: Vec<String>,
    },
    Reset {
        #[serde(default = "default_session")]
        session: String,
    },
    Health,
}

/// A ranked word as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionEntry {
    pub word: String,
    pub score: usize,
}

/// Outgoing response, tagged by `status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok {
        candidates: Vec<String>,
        suggestions: Vec<SuggestionEntry>,
    },
    Cleared {
        session: String,
    },
    Healthy {
        service: &'static str,
    },
    Error {
        detail: String,
    },
}

impl Response {
    fn error(message: impl std::fmt::Display) -> Self {
        Self::Error {
            detail: format!("Error processing feedback: {message}"),
        }
    }
}

impl From<RoundResult> for Response {
    /// Candidates stay lowercase; suggested words are uppercased
    fn from(result: RoundResult) -> Self {
        let suggestions = result
            .suggestions()
            .iter()
            .map(|scored| SuggestionEntry {
                word: scored.word.text().to_uppercase(),
                score: scored.score,
            })
            .collect();
        let candidates = result
            .candidates
            .into_iter()
            .map(|word| word.text().to_string())
            .collect();
        Self::Ok {
            candidates,
            suggestions,
        }
    }
}

/// Request dispatcher holding one session per id
#[derive(Debug)]
pub struct Server<'a> {
    solver: &'a Solver,
    sessions: FxHashMap<String, Session>,
}

impl<'a> Server<'a> {
    #[must_use]
    pub fn new(solver: &'a Solver) -> Self {
        Self {
            solver,
            sessions: FxHashMap::default(),
        }
    }

    /// Number of sessions that have received feedback
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Parse and answer one line; malformed JSON becomes an error response
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                log::debug!("Rejected request: {e}");
                Response::error(e)
            }
        }
    }

    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::ProcessFeedback {
                session,
                guess,
                greens,
                yellows,
                greys,
            } => {
                let state = self.sessions.entry(session).or_default();
                match state.process_feedback(self.solver, &guess, &greens, &yellows, &greys) {
                    Ok(result) => result.into(),
                    Err(e) => Response::error(e),
                }
            }
            Request::Reset { session } => {
                self.sessions.remove(&session);
                Response::Cleared { session }
            }
            Request::Health => Response::Healthy {
                service: SERVICE_NAME,
            },
        }
    }
}

/// Serve requests until the input ends
///
/// Blank lines are skipped. Failing requests are answered with an error
/// object and the loop keeps reading.
///
/// # Errors
///
/// Returns an error only if reading the input or writing a response fails.
pub fn run_serve<R: BufRead, W: Write>(solver: &Solver, reader: R, mut writer: W) -> Result<()> {
    let mut server = Server::new(solver);
    log::info!("Serving JSON-lines requests");

    for line in reader.lines() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = server.handle_line(&line);
        let encoded = serde_json::to_string(&response).context("Failed to encode response")?;
        writeln!(writer, "{encoded}").context("Failed to write response")?;
        writer.flush().context("Failed to flush response")?;
    }

    log::info!("Input closed after {} session(s)", server.session_count());
    Ok(())
}
