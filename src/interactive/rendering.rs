//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::candidate_sections;
use crate::output::formatters::{feedback_tiles, letter_list, suggestion_line};
use crate::solver::Suggestion;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE HELPER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.last_result {
        None => vec![Line::from(format!(
            "{} words loaded. Enter your first guess.",
            app.solver.dictionary().len()
        ))],
        Some(result) if result.candidates.is_empty() => {
            vec![Line::from(Span::styled(
                "No candidate words found.",
                Style::default().fg(Color::Red),
            ))]
        }
        Some(result) => {
            let mut lines = Vec::new();
            for section in candidate_sections(&result.candidates) {
                lines.push(Line::from(Span::styled(
                    format!("{} ({})", section.title, section.count),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.extend(section.rows.into_iter().map(|row| Line::from(format!("  {row}"))));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Candidates ({}) ", app.candidates_count()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = match app.last_result.as_ref().map(|r| &r.suggestion) {
        None => vec![ListItem::new(Line::from(vec![
            Span::raw("Suggested first guess: "),
            Span::styled(app.solver.first_guess(), highlight),
        ]))],
        Some(Suggestion::Default(word)) => vec![ListItem::new(Line::from(vec![
            Span::raw("Suggested next guess: "),
            Span::styled(*word, highlight),
        ]))],
        Some(Suggestion::Ranked(words)) => words
            .iter()
            .enumerate()
            .map(|(i, scored)| {
                let style = if i == 0 {
                    highlight
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(suggestion_line(scored)).style(style)
            })
            .collect(),
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Constraints
            Constraint::Min(3),    // History
            Constraint::Length(8), // Messages
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.flow.session().constraints();
    let yellow: Vec<String> = constraints
        .yellow
        .letters()
        .into_iter()
        .map(|letter| {
            let mut positions: Vec<usize> = constraints
                .yellow
                .excluded_positions(letter)
                .map(|set| set.iter().copied().collect())
                .unwrap_or_default();
            positions.sort_unstable();
            let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
            format!("{}∉{{{}}}", char::from(letter), positions.join(","))
        })
        .collect();

    let content = vec![
        Line::from(vec![
            Span::raw("Green:  "),
            Span::styled(
                constraints.green.to_feedback_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Yellow: "),
            Span::styled(
                if yellow.is_empty() {
                    "-".to_string()
                } else {
                    yellow.join(" ")
                },
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Grey:   "),
            Span::styled(
                letter_list(&constraints.grey.letters()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.flow.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, feedback)| {
            ListItem::new(format!(
                "{}: {} {}",
                i + 1,
                feedback.guess.text().to_uppercase(),
                feedback_tiles(feedback)
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode() {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! | Press 'n' for new game or 'q' to quit ".to_string(),
            Color::Green,
        ),
        InputMode::Feedback(prompt) => (format!(" {} ", prompt.text()), Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
        ])
        .split(area);

    let step = match app.input_mode() {
        InputMode::Feedback(prompt) => prompt.label(),
        InputMode::WinCelebration => "Solved",
    };
    let round = Paragraph::new(format!("Round {} | {step}", app.flow.round()))
        .alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats = Paragraph::new(format!(
        "Puzzles: {} | Solved: {}",
        app.stats.puzzles, app.stats.solved
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates = Paragraph::new(format!("Candidates: {}", app.candidates_count()))
        .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode() {
        InputMode::WinCelebration => "n: New Game | q: Quit",
        InputMode::Feedback(_) => "Enter: Submit | 'quit' or Esc: Exit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;
    use crate::wordlists::{FrequencyTable, words_from_slice};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_first_guess_and_prompt() {
        let solver = Solver::new(words_from_slice(&["saint", "slant"]), FrequencyTable::default());
        let app = App::new(&solver);
        let text = screen(&app);
        assert!(text.contains("SAINT"));
        assert!(text.contains("Enter your guess"));
        assert!(text.contains("Candidates: 2"));
    }

    #[test]
    fn draws_round_results() {
        let solver = Solver::new(
            words_from_slice(&["saint", "slant", "plant", "hello"]),
            FrequencyTable::default(),
        );
        let mut app = App::new(&solver);
        for line in ["crane", "..A..", ".....", "C R E"] {
            app.input_buffer = line.to_string();
            app.submit_input();
        }

        let text = screen(&app);
        assert!(text.contains("PLANT SLANT"));
        assert!(text.contains("PLANT (score: 4000)"));
        assert!(text.contains("..A.."));
    }
}
