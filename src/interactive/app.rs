//! TUI application state and event loop

use super::input::LineInput;
use crate::core::{Effect, Game, GameEvent, WORD_LENGTH};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info, instrument};

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// Application state: the game plus the live input line
pub struct App {
    pub game: Game,
    pub input: LineInput,
    pub should_quit: bool,
    pub outcome: Option<Outcome>,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            input: LineInput::new(WORD_LENGTH),
            should_quit: false,
            outcome: None,
        }
    }

    /// Route one key press
    ///
    /// Ctrl-C quits, Enter commits the input line, anything else edits the line
    /// while a slot is active.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let event = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameEvent::Quit,
            KeyCode::Enter => GameEvent::Commit(self.input.value()),
            _ => {
                if self.game.active_slot().is_some() {
                    self.input.handle_key(key);
                }
                return;
            }
        };

        let effect = self.game.handle_event(event);
        self.apply(effect);
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::NextTurn => self.input.clear(),
            Effect::Won => {
                self.input.clear();
                self.outcome = Some(Outcome::Won);
            }
            Effect::Lost => {
                self.input.clear();
                self.outcome = Some(Outcome::Lost);
                self.should_quit = true;
            }
            Effect::Quit => {
                self.outcome.get_or_insert(Outcome::Quit);
                self.should_quit = true;
            }
        }
    }
}

/// Run the TUI application
///
/// Returns the final app state so the caller can print a summary once the terminal
/// has been restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    info!("Starting terminal session");

    // Setup terminal, undoing earlier steps if a later one fails
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    undo_on_error(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })
    .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = undo_on_error(Terminal::new(backend), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
    .context("failed to create terminal")?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    info!(outcome = ?app.outcome, "Terminal session finished");
    Ok(app)
}

/// Run `undo` when `result` is an error, then hand the result back
fn undo_on_error<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

#[instrument(skip_all)]
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "Key pressed");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
