//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and stats for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{LetterResult, WORD_LEN};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::session::MAX_GUESSES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board + side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile style for a scored letter
fn tile_style(result: Option<LetterResult>) -> Style {
    let (fg, bg) = match result {
        Some(LetterResult::Correct) => (Color::Black, Color::Green),
        Some(LetterResult::Present) => (Color::Black, Color::Yellow),
        Some(LetterResult::Absent) => (Color::White, Color::DarkGray),
        None => (Color::White, Color::Reset),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, result: Option<LetterResult>) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), tile_style(result))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 WORD QUEST")
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

/// Six rows: scored guesses, the row being typed, then empty rows
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.game.session;
    let history = session.history();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);
        if let Some(record) = history.get(row) {
            for (i, letter) in record.word.text().chars().enumerate() {
                spans.push(tile(letter, Some(record.feedback.get(i))));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && !session.state().is_terminal() {
            let typed: Vec<char> = session.input().chars().collect();
            for i in 0..WORD_LEN {
                let letter = typed.get(i).copied().unwrap_or('_');
                spans.push(tile(letter, None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LEN {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| [tile(c, keyboard.get(c)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = if app.game.session.is_remote() {
        "Mode: Remote"
    } else {
        "Mode: Local"
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.is_game_over() {
        "n/Enter: New Game | Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameSetup;
    use crate::session::SessionOptions;
    use crate::wordlists::FixedWord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(word: &str) -> App {
        App::new(GameSetup::new(
            Box::new(FixedWord(Word::new(word).unwrap())),
            SessionOptions::default(),
            false,
            StdRng::seed_from_u64(3),
        ))
    }

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_has_six_rows() {
        let lines = board_lines(&app("graph"));
        assert_eq!(lines.len(), MAX_GUESSES * 2);
    }

    #[test]
    fn scored_row_is_coloured() {
        let mut app = app("graph");
        app.game.submit("train").unwrap();
        let lines = board_lines(&app);
        assert_eq!(row_text(&lines[0]).replace(' ', ""), "TRAIN");
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::DarkGray));
        assert_eq!(lines[0].spans[2].style.bg, Some(Color::Green));
    }

    #[test]
    fn typed_row_shows_input() {
        let mut app = app("graph");
        app.game.session.type_letter('g');
        app.game.session.type_letter('r');
        let lines = board_lines(&app);
        assert_eq!(row_text(&lines[0]).replace(' ', ""), "GR___");
    }
}
