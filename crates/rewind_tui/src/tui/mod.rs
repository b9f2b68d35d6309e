//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Focus, HitMap};
pub use input::{Action, action_for, move_cursor};
pub use ui::draw;

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Loads settings for `play` and starts file logging.
///
/// The settings file names the log file, so the load is recorded once the
/// subscriber is installed.
pub fn setup(config: &Path, reverse: bool) -> Result<Settings> {
    let found = config.exists();
    let settings = Settings::load_or_default(config)?.with_reverse_history(reverse);
    crate::logging::init_file_logging(settings.log_file(), settings.log_filter())?;
    info!(config = %config.display(), found, ?settings, "Settings loaded");
    Ok(settings)
}

/// Runs the TUI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting rewind TUI");

    let mut terminal = init_terminal()?;
    let app = App::new(*settings.reverse_history(), *settings.show_hints());
    let res = run_app(&mut terminal, app);

    // Always restore the terminal, even if the loop failed
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn init_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let terminal = enter_alternate_screen();
    if terminal.is_err() {
        restore_terminal()?;
    }
    terminal
}

fn enter_alternate_screen() -> Result<CrosstermTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn run_app(terminal: &mut CrosstermTerminal, mut app: App) -> Result<()> {
    while app.is_running() {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = draw(f, &app))?;
        app.set_hits(hits);

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
    Ok(())
}
