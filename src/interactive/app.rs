//! TUI application state and logic

use super::flow::{Flow, Outcome, Prompt};
use crate::solver::{RoundResult, Solver};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub solver: &'a Solver,
    pub flow: Flow,
    pub input_buffer: String,
    pub last_result: Option<RoundResult>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback(Prompt),
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles: usize,
    pub solved: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: &'a Solver) -> Self {
        let mut app = Self {
            solver,
            flow: Flow::new(),
            input_buffer: String::new(),
            last_result: None,
            messages: Vec::new(),
            stats: Statistics {
                puzzles: 1,
                solved: 0,
            },
            should_quit: false,
        };
        app.greet();
        app
    }

    fn greet(&mut self) {
        self.add_message(
            &format!("Welcome! Suggested first guess: {}", self.solver.first_guess()),
            MessageStyle::Info,
        );
        self.add_message(Prompt::Guess.text(), MessageStyle::Info);
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.flow
            .prompt()
            .map_or(InputMode::WinCelebration, InputMode::Feedback)
    }

    /// Candidate count after the latest round, or the whole word list before any
    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.last_result
            .as_ref()
            .map_or_else(|| self.solver.dictionary().len(), |r| r.candidates.len())
    }

    /// Feed the input buffer to the flow
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.flow.submit(self.solver, &input) {
            Outcome::Continue(prompt) => self.add_message(prompt.text(), MessageStyle::Info),
            Outcome::Invalid(error) => {
                self.add_message(
                    &format!("Error: {error}. Please try again."),
                    MessageStyle::Error,
                );
            }
            Outcome::Round(result) => {
                let message = if result.candidates.is_empty() {
                    "No candidate words found.".to_string()
                } else {
                    format!("{} candidates remaining", result.candidates.len())
                };
                self.add_message(&message, MessageStyle::Info);
                self.add_message(
                    &format!("Suggested next guess: {}", result.suggestion.best()),
                    MessageStyle::Success,
                );
                self.last_result = Some(result);
            }
            Outcome::Solved => {
                self.stats.solved += 1;
                let rounds = self.flow.history().len();
                self.add_message(
                    &format!("🎉 Puzzle solved in {rounds} round(s)!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::UserExited => self.should_quit = true,
        }
    }

    pub fn new_game(&mut self) {
        self.flow.restart();
        self.last_result = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.stats.puzzles += 1;
        self.greet();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode() {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Feedback(_) => match key.code {
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
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

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn round_updates_candidates() {
        let solver = solver();
        let mut app = App::new(&solver);
        assert_eq!(app.candidates_count(), 6);

        for line in ["saint", "S....", ".A...", "E R"] {
            type_line(&mut app, line);
        }
        assert_eq!(app.candidates_count(), 1);
        assert_eq!(app.input_mode(), InputMode::Feedback(Prompt::Guess));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn invalid_input_shows_error() {
        let solver = solver();
        let mut app = App::new(&solver);
        type_line(&mut app, "sa");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.ends_with("Please try again."));
        assert_eq!(app.input_mode(), InputMode::Feedback(Prompt::Guess));
    }

    #[test]
    fn solved_offers_new_game_or_quit() {
        let solver = solver();
        let mut app = App::new(&solver);
        type_line(&mut app, "saint");
        type_line(&mut app, "SAINT");
        assert_eq!(app.input_mode(), InputMode::WinCelebration);
        assert_eq!(app.stats.solved, 1);

        app.handle_key(KeyEvent::from(KeyCode::Char('x')));
        assert_eq!(app.input_mode(), InputMode::WinCelebration);

        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(app.input_mode(), InputMode::Feedback(Prompt::Guess));
        assert_eq!(app.stats.puzzles, 2);
        assert!(!app.should_quit);

        type_line(&mut app, "crane");
        type_line(&mut app, "CRANE");
        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn quit_and_escape_exit() {
        let solver = solver();
        let mut app = App::new(&solver);
        type_line(&mut app, "quit");
        assert!(app.should_quit);

        let mut app = App::new(&solver);
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new(&solver);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
