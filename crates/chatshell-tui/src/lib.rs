//! chatshell-tui: Terminal UI for the chatshell assistant
//!
//! This crate provides the terminal front end, including:
//! - Sidebar with conversation list (full / icons / hidden)
//! - Transcript with simulated assistant replies
//! - Delete confirmation and help overlays
//! - Headless mode for testing and automation

mod app;
mod error;
mod event;
pub mod headless;
mod input;
mod layout;
#[cfg(test)]
pub mod test_utils;
mod text;
mod theme;
mod widgets;

pub use app::{App, Focus};
pub use chatshell_engine;
pub use error::TuiError;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use headless::{run_tui_headless, HeadlessConfig, HeadlessHandle, HeadlessState};
pub use input::TextInputState;
pub use layout::{render_app, MIN_HEIGHT, MIN_WIDTH};
pub use theme::{IconMode, Theme};

use chatshell_engine::{Config, Reply};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tokio::task::JoinHandle;
use tracing::info;

/// Event loop tick, also the pulse animation rate.
const TICK_RATE_MS: u64 = 150;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit (also on error or panic unwinding).
pub async fn run_tui(config: &Config) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let mut events = EventHandler::new(TICK_RATE_MS);
    info!("TUI started");

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;
    info!("TUI stopped");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), TuiError> {
    let mut reply_handles: Vec<JoinHandle<Reply>> = Vec::new();

    loop {
        // Finished replies land in the frame drawn below
        app.apply_finished_replies(&mut reply_handles).await;

        terminal.draw(|frame| {
            let area = frame.area();
            render_app(app, area, frame.buffer_mut());
        })?;

        if app.should_quit {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };

        let pending = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Key(_) | Event::Resize(_, _) => None,
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.handle_action(Action::ScrollUp),
                MouseEventKind::ScrollDown => app.handle_action(Action::ScrollDown),
                _ => None,
            },
            Event::Tick => {
                app.tick();
                None
            }
        };

        if let Some(pending) = pending {
            reply_handles.push(app.spawn_reply(pending));
        }
    }

    for handle in reply_handles {
        handle.abort();
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
