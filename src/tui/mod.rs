//! Terminal UI for tic-tac-toe

mod app;
mod input;
mod pulse;
mod theme;
mod ui;

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
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
pub use app::App;
pub use input::{Action, action_for_hit, action_for_key, move_cursor};
pub use pulse::MovePulse;
pub use theme::Theme;
pub use ui::{Hit, ScreenLayout, draw, hit_test, screen_layout};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Log to a file so nothing scribbles over the alternate screen
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(settings);
    let res = run_loop(guard.terminal_mut(), &mut app, settings.poll_interval());

    if let Err(err) = &res {
        warn!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, wait for one input, apply it, repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App, poll: Duration) -> Result<()> {
    loop {
        let area = terminal.draw(|frame| draw(frame, app))?.area;

        if event::poll(poll)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    action_for_key(app.cursor(), key.code)
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    hit_test(area, mouse.column, mouse.row).map(action_for_hit)
                }
                _ => None,
            };
            if let Some(action) = action {
                app.apply(action, Instant::now());
            }
        }

        app.tick(Instant::now());
        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Restores the terminal on drop, even when the loop bails out early.
struct TerminalGuard {
    terminal: Term,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
