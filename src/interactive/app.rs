//! TUI application state and logic

use crate::game::{Game, GameSetup};
use crate::session::{MAX_GUESSES, SessionState, TargetOrigin};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    setup: GameSetup,
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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
    pub total_games: usize,
    pub games_won: usize,
    /// Index n counts wins in n guesses
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(mut setup: GameSetup) -> Self {
        let game = setup.new_game();
        let mut app = Self {
            setup,
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Guess the 5-letter word in 6 tries. Type and press Enter.",
            MessageStyle::Info,
        );
        app.report_fallback();
        app
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.session.state().is_terminal()
    }

    pub fn new_game(&mut self) {
        self.game = self.setup.new_game();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.report_fallback();
    }

    fn report_fallback(&mut self) {
        if let Some(TargetOrigin::Fallback { reason }) = self.game.fallback() {
            let text = format!("Word list unavailable ({reason}); using the built-in list.");
            self.add_message(&text, MessageStyle::Error);
        }
    }

    /// Submit the typed row and update messages and stats
    pub fn submit(&mut self) {
        match self.game.commit() {
            Ok(turn) => match turn.state {
                SessionState::Won => {
                    let guesses = self.game.session.history().len();
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    self.stats.guess_distribution[guesses] += 1;
                    let celebration = match guesses {
                        1 => "🎯 HOLE IN ONE!",
                        2 => "🔥 MAGNIFICENT! Two guesses!",
                        3 => "✨ SPLENDID! Three guesses!",
                        4 => "👏 GREAT JOB! Four guesses!",
                        5 => "🎉 NICE WORK! Five guesses!",
                        _ => "😅 PHEW! Got it in six!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' or Enter for a new game.", MessageStyle::Info);
                }
                SessionState::Lost => {
                    self.stats.total_games += 1;
                    let answer = self
                        .game
                        .answer()
                        .map_or_else(|| "?????".to_string(), |w| w.text().to_uppercase());
                    self.add_message(
                        &format!("Out of guesses! The word was {answer}."),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' or Enter for a new game.", MessageStyle::Info);
                }
                SessionState::InProgress | SessionState::AwaitingRemote(_) => {
                    let left = self.game.session.guesses_remaining();
                    self.add_message(&format!("{left} guess(es) left"), MessageStyle::Info);
                }
            },
            Err(err) => {
                debug!(error = %err, "guess rejected");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
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

        if self.is_game_over() {
            match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        // Shortcuts like Ctrl-W or Alt-F are not letters
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char(c) if !chorded => {
                self.game.session.type_letter(c);
            }
            KeyCode::Backspace => {
                self.game.session.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Last error shown, if the most recent message is one
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|m| m.style == MessageStyle::Error)
            .map(|m| m.text.as_str())
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
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
