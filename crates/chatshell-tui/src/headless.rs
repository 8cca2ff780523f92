//! Headless mode for the chatshell TUI.
//!
//! Runs the same [`App`] against a `TestBackend` instead of a real
//! terminal. Input arrives over a channel and the rendered screen is
//! published after every frame, which makes end-to-end tests and
//! automation possible.

use crate::app::App;
use crate::error::TuiError;
use crate::event::Action;
use crate::layout::{render_app, screen_text};
use chatshell_engine::{Config, Reply};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Screen width used when none is given.
pub const DEFAULT_WIDTH: u16 = 80;
/// Screen height used when none is given.
pub const DEFAULT_HEIGHT: u16 = 24;

/// Input delivered to a headless instance.
#[derive(Debug, Clone)]
enum HeadlessInput {
    Action(Action),
    Key(KeyEvent),
}

/// Snapshot published after every headless frame.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Rendered screen, one line per row.
    pub screen_contents: String,
    /// Whether the delete dialog is open.
    pub dialog_visible: bool,
    /// Number of conversations in the sidebar.
    pub conversation_count: usize,
    /// Whether any simulated reply is outstanding.
    pub loading: bool,
    /// Whether the key help is open.
    pub show_help: bool,
    /// Whether a quit was requested.
    pub should_quit: bool,
}

/// Drives a running headless shell and observes its screen.
pub struct HeadlessHandle {
    input_tx: mpsc::UnboundedSender<HeadlessInput>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Queue an action. `false` once the loop has stopped.
    pub fn send_action(&self, action: Action) -> bool {
        self.input_tx.send(HeadlessInput::Action(action)).is_ok()
    }

    /// Send a raw key press to the TUI.
    pub fn send_key(&self, key: KeyEvent) -> bool {
        self.input_tx.send(HeadlessInput::Key(key)).is_ok()
    }

    /// Type text into the input bar, one key per character.
    pub fn type_text(&self, text: &str) -> bool {
        text.chars()
            .all(|c| self.send_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    /// Latest published snapshot.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Block until `condition` holds for a snapshot, or give up after `timeout`.
    pub async fn wait_for<F>(&mut self, condition: F, timeout: Duration) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            match tokio::time::timeout(remaining, self.state_rx.changed()).await {
                Ok(Ok(())) => {}
                // Timed out, or the TUI task has ended
                Ok(Err(_)) | Err(_) => {
                    let state = self.state();
                    return condition(&state).then_some(state);
                }
            }
        }
    }

    /// Block until `text` is visible somewhere on screen.
    pub async fn wait_for_text(&mut self, text: &str, timeout: Duration) -> Option<HeadlessState> {
        self.wait_for(|s| s.screen_contents.contains(text), timeout)
            .await
    }

    /// Whether the last snapshot requested a quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Settings for [`run_tui_headless`].
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Idle tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Chat configuration.
    pub config: Config,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50,
            config: Config::default(),
        }
    }
}

/// Spawn the shell on a `TestBackend`.
///
/// The task finishes when a quit is requested or the handle is dropped.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) = run_tui_headless(HeadlessConfig::default());
///
/// handle.type_text("Hello");
/// handle.send_action(Action::Select);
/// handle.wait_for_text("simulated response", Duration::from_secs(2)).await;
///
/// handle.send_action(Action::Quit);
/// task.await??;
/// ```
pub fn run_tui_headless(
    config: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), TuiError>>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(run_headless_loop(config, input_rx, state_tx));

    let handle = HeadlessHandle { input_tx, state_rx };

    (handle, task)
}

async fn run_headless_loop(
    config: HeadlessConfig,
    mut input_rx: mpsc::UnboundedReceiver<HeadlessInput>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), TuiError> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(&config.config);
    let mut reply_handles: Vec<JoinHandle<Reply>> = Vec::new();
    let tick_duration = Duration::from_millis(config.tick_rate_ms);

    loop {
        // Finished replies land in the frame drawn below
        app.apply_finished_replies(&mut reply_handles).await;

        terminal.draw(|frame| {
            let area = frame.area();
            render_app(&app, area, frame.buffer_mut());
        })?;

        let screen_contents = screen_text(terminal.backend().buffer());
        let published = state_tx.send(HeadlessState {
            screen_contents,
            dialog_visible: app.shell.delete_dialog().visible,
            conversation_count: app.shell.conversations().len(),
            loading: app.shell.is_loading(),
            show_help: app.show_help,
            should_quit: app.should_quit,
        });

        // Quit on request, or once every handle has been dropped
        if app.should_quit || published.is_err() {
            break;
        }

        let input = tokio::select! {
            Some(input) = input_rx.recv() => Some(input),
            () = tokio::time::sleep(tick_duration) => None,
        };

        let pending = match input {
            Some(HeadlessInput::Action(action)) => app.handle_action(action),
            Some(HeadlessInput::Key(key)) => app.handle_key(key),
            None => {
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
