//! Application state and update logic for the chatshell TUI.

use crate::event::{key_to_action, Action};
use crate::input::TextInputState;
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use chatshell_engine::{
    deliver_reply, ChatShell, Config, ConversationId, PendingReply, Reply, Responder,
    ScriptedResponder,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::Cell;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Lines moved per transcript scroll step.
pub const SCROLL_STEP: usize = 3;

/// Which part of the screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The message input (typing goes here).
    #[default]
    Input,
    /// The conversation list.
    Sidebar,
}

impl Focus {
    /// The other focus target.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Input => Self::Sidebar,
            Self::Sidebar => Self::Input,
        }
    }
}

/// Main application state.
pub struct App {
    /// Chat state machine.
    pub shell: ChatShell,
    /// Message input.
    pub input: TextInputState,
    /// Current focus.
    pub focus: Focus,
    /// Highlighted sidebar row while the sidebar has focus.
    pub sidebar_cursor: usize,
    /// Transcript scroll, in lines above the newest message.
    pub transcript_scroll: usize,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Animation tick counter.
    pub tick: usize,
    /// Color palette.
    pub theme: Theme,
    /// Glyphs for the configured icon mode.
    pub icons: IconSet,
    /// Border sets for the configured icon mode.
    pub borders: BorderSet,
    /// Largest useful scroll value, written back by the transcript renderer.
    pub(crate) transcript_max_scroll: Cell<usize>,
    responder: Arc<dyn Responder>,
    reply_delay: Duration,
}

impl App {
    /// Create the app from configuration.
    pub fn new(config: &Config) -> Self {
        let mode = IconMode::from_preference(config.ui.icons);
        let shell = ChatShell::new(config);
        let sidebar_cursor = shell
            .active_id()
            .and_then(|id| shell.position(id))
            .unwrap_or(0);

        Self {
            shell,
            input: TextInputState::new(),
            focus: Focus::default(),
            sidebar_cursor,
            transcript_scroll: 0,
            show_help: false,
            should_quit: false,
            tick: 0,
            theme: Theme::from_name(config.ui.theme),
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            transcript_max_scroll: Cell::new(0),
            responder: Arc::new(ScriptedResponder::new(config.reply_template.clone())),
            reply_delay: config.reply_delay(),
        }
    }

    /// Create an app with default settings and Unicode icons, independent of `NO_COLOR`.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let mut config = Config::default();
        config.ui.icons = chatshell_engine::IconPreference::Unicode;
        Self::new(&config)
    }

    /// Spawn the delayed delivery of a simulated reply.
    pub fn spawn_reply(&self, pending: PendingReply) -> JoinHandle<Reply> {
        tokio::spawn(deliver_reply(
            pending,
            Arc::clone(&self.responder),
            self.reply_delay,
        ))
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Apply a finished reply to the shell.
    pub fn apply_reply(&mut self, reply: Reply) {
        let landed_here = Some(reply.conversation_id) == self.shell.active_id();
        if self.shell.complete_reply(reply) && landed_here {
            self.transcript_scroll = 0;
        }
    }

    /// Take the finished reply tasks out of `handles` and apply them.
    ///
    /// Tasks still sleeping stay in `handles`.
    pub async fn apply_finished_replies(&mut self, handles: &mut Vec<JoinHandle<Reply>>) {
        let (done, running): (Vec<_>, Vec<_>) =
            handles.drain(..).partition(JoinHandle::is_finished);
        *handles = running;
        for handle in done {
            match handle.await {
                Ok(reply) => self.apply_reply(reply),
                Err(e) => debug!(error = %e, "Reply task did not complete"),
            }
        }
    }

    /// Handle a key press.
    ///
    /// Text keys go to the input bar while it has focus; everything else is
    /// translated through [`key_to_action`]. Returns a reply to schedule
    /// when the key submitted a message.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PendingReply> {
        if self.show_help {
            self.show_help = false;
            if key_to_action(key) == Action::Quit {
                self.should_quit = true;
            }
            return None;
        }

        let dialog_open = self.shell.delete_dialog().visible;

        if dialog_open {
            match key.code {
                KeyCode::Char('y' | 'Y') => return self.handle_action(Action::Select),
                KeyCode::Char('n' | 'N') => return self.handle_action(Action::Back),
                _ => {}
            }
        }

        let editing = self.focus == Focus::Input
            && !dialog_open
            && !key.modifiers.contains(KeyModifiers::CONTROL);

        if editing {
            let consumed = match key.code {
                KeyCode::Char(c) => {
                    self.input.insert(c);
                    true
                }
                KeyCode::Backspace => {
                    self.input.backspace();
                    true
                }
                KeyCode::Delete => {
                    self.input.delete();
                    true
                }
                KeyCode::Left => {
                    self.input.move_left();
                    true
                }
                KeyCode::Right => {
                    self.input.move_right();
                    true
                }
                KeyCode::Home => {
                    self.input.move_home();
                    true
                }
                KeyCode::End => {
                    self.input.move_end();
                    true
                }
                _ => false,
            };
            if consumed {
                return None;
            }
        }

        self.handle_action(key_to_action(key))
    }

    /// Handle an action. Returns a reply to schedule when a message was submitted.
    pub fn handle_action(&mut self, action: Action) -> Option<PendingReply> {
        if action == Action::None {
            return None;
        }

        if self.show_help {
            self.show_help = false;
            if action == Action::Quit {
                self.should_quit = true;
            }
            return None;
        }

        if self.shell.delete_dialog().visible {
            self.handle_dialog_action(action);
            return None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::NewChat => {
                self.shell.create_conversation();
                self.sync_cursor_to_active();
                self.transcript_scroll = 0;
            }
            Action::ToggleSidebar => {
                if !self.shell.toggle_sidebar().is_visible() {
                    self.focus = Focus::Input;
                }
            }
            Action::DeleteConversation => {
                if let Some(id) = self.delete_target() {
                    self.shell.request_delete(id);
                }
            }
            Action::FocusNext => {
                self.focus = if self.shell.sidebar_mode().is_visible() {
                    self.focus.toggle()
                } else {
                    Focus::Input
                };
                if self.focus == Focus::Sidebar {
                    self.sync_cursor_to_active();
                }
            }
            Action::Back => match self.focus {
                Focus::Sidebar => self.focus = Focus::Input,
                Focus::Input => self.input.clear(),
            },
            Action::Select => match self.focus {
                Focus::Sidebar => {
                    self.select_cursor_row();
                    self.focus = Focus::Input;
                }
                Focus::Input => return self.submit_input(),
            },
            Action::Up => match self.focus {
                Focus::Sidebar => self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1),
                Focus::Input => self.input.history_prev(),
            },
            Action::Down => match self.focus {
                Focus::Sidebar => {
                    let last = self.shell.conversations().len().saturating_sub(1);
                    self.sidebar_cursor = (self.sidebar_cursor + 1).min(last);
                }
                Focus::Input => self.input.history_next(),
            },
            Action::ScrollUp => {
                self.transcript_scroll = (self.transcript_scroll + SCROLL_STEP)
                    .min(self.transcript_max_scroll.get());
            }
            Action::ScrollDown => {
                self.transcript_scroll = self.transcript_scroll.saturating_sub(SCROLL_STEP);
            }
            Action::None => {}
        }

        None
    }

    fn handle_dialog_action(&mut self, action: Action) {
        match action {
            Action::Select => {
                if let Some(id) = self.shell.confirm_delete() {
                    debug!(conversation = %id, "Conversation deleted from TUI");
                }
                self.clamp_cursor();
                if self.focus == Focus::Input {
                    self.sync_cursor_to_active();
                }
                self.transcript_scroll = 0;
            }
            Action::Back => self.shell.cancel_delete(),
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    /// Submit the input to the active conversation.
    ///
    /// Blank input is left in place and nothing is sent.
    pub fn submit_input(&mut self) -> Option<PendingReply> {
        if self.input.is_blank() {
            return None;
        }
        let text = self.input.submit();
        let pending = self.shell.submit(&text);
        self.transcript_scroll = 0;
        pending
    }

    /// Conversation a delete request applies to: the cursor row while the
    /// sidebar has focus, otherwise the active conversation.
    pub fn delete_target(&self) -> Option<ConversationId> {
        match self.focus {
            Focus::Sidebar => self
                .shell
                .conversations()
                .get(self.sidebar_cursor)
                .map(|c| c.id),
            Focus::Input => self.shell.active_id(),
        }
    }

    fn select_cursor_row(&mut self) {
        if let Some(id) = self
            .shell
            .conversations()
            .get(self.sidebar_cursor)
            .map(|c| c.id)
        {
            if self.shell.select_conversation(id) {
                self.transcript_scroll = 0;
            }
        }
    }

    fn sync_cursor_to_active(&mut self) {
        self.sidebar_cursor = self
            .shell
            .active_id()
            .and_then(|id| self.shell.position(id))
            .unwrap_or(0);
    }

    fn clamp_cursor(&mut self) {
        let last = self.shell.conversations().len().saturating_sub(1);
        self.sidebar_cursor = self.sidebar_cursor.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_app_to_string;
    use chatshell_engine::{Role, SidebarMode};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state() {
        let app = App::new_for_test();
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.shell.conversations().len(), 3);
        assert_eq!(app.sidebar_cursor, 0);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Input.toggle(), Focus::Sidebar);
        assert_eq!(Focus::Sidebar.toggle(), Focus::Input);
    }

    #[test]
    fn test_typing_goes_to_input() {
        let mut app = App::new_for_test();
        type_text(&mut app, "quit now");
        assert_eq!(app.input.content(), "quit now");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_enter_submits_message() {
        let mut app = App::new_for_test();
        type_text(&mut app, "Hello there");
        let pending = app.handle_key(key(KeyCode::Enter)).expect("reply scheduled");

        assert_eq!(pending.prompt, "Hello there");
        assert!(app.input.is_empty());
        assert!(app.shell.is_loading());
        let last = app.shell.transcript().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(app.shell.active().unwrap().title, "Hello there");
    }

    #[test]
    fn test_blank_input_not_submitted_or_cleared() {
        let mut app = App::new_for_test();
        type_text(&mut app, "   ");
        assert!(app.handle_key(key(KeyCode::Enter)).is_none());
        assert_eq!(app.input.content(), "   ");
        assert_eq!(app.shell.transcript().len(), 1);
    }

    #[test]
    fn test_apply_reply_clears_loading() {
        let mut app = App::new_for_test();
        type_text(&mut app, "hi");
        let pending = app.handle_key(key(KeyCode::Enter)).unwrap();
        app.apply_reply(pending.resolve(&ScriptedResponder::default()));

        assert!(!app.shell.is_loading());
        assert_eq!(app.shell.transcript().len(), 3);
        assert_eq!(app.shell.transcript()[2].role, Role::Assistant);
    }

    #[test]
    fn test_ctrl_shortcuts_work_while_typing() {
        let mut app = App::new_for_test();
        type_text(&mut app, "draft");

        app.handle_key(ctrl('n'));
        assert_eq!(app.shell.conversations().len(), 4);
        assert_eq!(app.input.content(), "draft");

        app.handle_key(ctrl('b'));
        assert_eq!(app.shell.sidebar_mode(), SidebarMode::Icons);

        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_sidebar_navigation_and_select() {
        let mut app = App::new_for_test();
        app.handle_action(Action::FocusNext);
        assert_eq!(app.focus, Focus::Sidebar);

        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        assert_eq!(app.sidebar_cursor, 2);

        app.handle_action(Action::Select);
        assert_eq!(app.shell.active_id(), Some(ConversationId(3)));
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_sidebar_cursor_stops_at_top() {
        let mut app = App::new_for_test();
        app.handle_action(Action::FocusNext);
        app.handle_action(Action::Up);
        assert_eq!(app.sidebar_cursor, 0);
    }

    #[test]
    fn test_hidden_sidebar_cannot_take_focus() {
        let mut app = App::new_for_test();
        app.handle_action(Action::FocusNext);
        assert_eq!(app.focus, Focus::Sidebar);

        app.handle_action(Action::ToggleSidebar);
        app.handle_action(Action::ToggleSidebar);
        assert_eq!(app.shell.sidebar_mode(), SidebarMode::Hidden);
        assert_eq!(app.focus, Focus::Input);

        app.handle_action(Action::FocusNext);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_delete_targets_active_from_input() {
        let mut app = App::new_for_test();
        app.handle_key(ctrl('d'));
        let dialog = app.shell.delete_dialog();
        assert!(dialog.visible);
        assert_eq!(dialog.target, Some(ConversationId(1)));
    }

    #[test]
    fn test_delete_targets_cursor_row_from_sidebar() {
        let mut app = App::new_for_test();
        app.handle_action(Action::FocusNext);
        app.handle_action(Action::Down);
        app.handle_key(key(KeyCode::Char('d')));

        assert_eq!(app.shell.delete_dialog().target, Some(ConversationId(2)));

        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.shell.conversations().len(), 2);
        assert_eq!(app.shell.active_id(), Some(ConversationId(1)));
        assert!(!app.shell.delete_dialog().visible);
    }

    #[test]
    fn test_dialog_cancel_with_n_and_esc() {
        let mut app = App::new_for_test();
        app.handle_action(Action::DeleteConversation);
        app.handle_key(key(KeyCode::Char('n')));
        assert!(!app.shell.delete_dialog().visible);
        assert_eq!(app.shell.conversations().len(), 3);

        app.handle_action(Action::DeleteConversation);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.shell.delete_dialog().visible);
        assert_eq!(app.shell.conversations().len(), 3);
    }

    #[test]
    fn test_dialog_swallows_typing() {
        let mut app = App::new_for_test();
        app.handle_action(Action::DeleteConversation);
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.input.is_empty());
        assert!(app.shell.delete_dialog().visible);
    }

    #[test]
    fn test_enter_confirms_delete_of_active() {
        let mut app = App::new_for_test();
        app.handle_action(Action::DeleteConversation);
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.shell.conversations().len(), 2);
        assert_eq!(app.shell.active_id(), Some(ConversationId(2)));
        assert_eq!(app.sidebar_cursor, 0);
    }

    #[test]
    fn test_help_overlay_closes_on_any_action() {
        let mut app = App::new_for_test();
        app.handle_key(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE));
        assert!(app.show_help);

        app.handle_key(key(KeyCode::Char('a')));
        assert!(!app.show_help);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_esc_clears_input_then_leaves_sidebar() {
        let mut app = App::new_for_test();
        type_text(&mut app, "abc");
        app.handle_key(key(KeyCode::Esc));
        assert!(app.input.is_empty());

        app.handle_action(Action::FocusNext);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_input_history_with_arrows() {
        let mut app = App::new_for_test();
        type_text(&mut app, "first");
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.input.content(), "first");
        app.handle_key(key(KeyCode::Down));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut app = App::new_for_test();
        app.transcript_max_scroll.set(4);
        app.handle_action(Action::ScrollUp);
        app.handle_action(Action::ScrollUp);
        assert_eq!(app.transcript_scroll, 4);

        app.handle_action(Action::ScrollDown);
        assert_eq!(app.transcript_scroll, 1);
        app.handle_action(Action::ScrollDown);
        assert_eq!(app.transcript_scroll, 0);
    }

    #[test]
    fn test_new_chat_resets_cursor() {
        let mut app = App::new_for_test();
        app.handle_action(Action::FocusNext);
        app.handle_action(Action::Down);
        app.handle_key(key(KeyCode::Char('n')));

        assert_eq!(app.sidebar_cursor, 0);
        assert_eq!(app.shell.active_id(), Some(ConversationId(4)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_reply_arrives_after_delay() {
        let mut app = App::new_for_test();
        type_text(&mut app, "ping");
        let pending = app.handle_key(key(KeyCode::Enter)).unwrap();

        let handle = app.spawn_reply(pending);
        let reply = handle.await.unwrap();
        app.apply_reply(reply);

        let last = app.shell.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert!(last.content.contains("\"ping\""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_held_until_delay_then_drawn() {
        let mut app = App::new_for_test();
        type_text(&mut app, "ping");
        let pending = app.handle_key(key(KeyCode::Enter)).unwrap();
        let mut handles = vec![app.spawn_reply(pending)];
        // let the task start its sleep
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(999)).await;
        tokio::task::yield_now().await;
        app.apply_finished_replies(&mut handles).await;
        assert_eq!(handles.len(), 1);
        assert_eq!(app.shell.transcript().last().unwrap().role, Role::User);
        assert!(app.shell.is_loading());

        tokio::time::advance(Duration::from_millis(2)).await;
        while !handles[0].is_finished() {
            tokio::task::yield_now().await;
        }
        app.apply_finished_replies(&mut handles).await;
        assert!(handles.is_empty());
        assert!(!app.shell.is_loading());
        assert_eq!(app.shell.transcript().len(), 3);

        let screen = render_app_to_string(&app);
        assert!(screen.contains("\"ping\""));
    }
}

