//! Reducer-style entry point for [`ChatShell`].
//!
//! Front ends translate user input into [`ShellAction`]s and feed them to
//! [`ChatShell::dispatch`]. The only side effect the shell can ask for is
//! scheduling a simulated reply.

use crate::chat::ConversationId;
use crate::reply::{PendingReply, Reply};
use crate::shell::ChatShell;

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Activate a conversation.
    Select(ConversationId),
    /// Start a new conversation.
    NewConversation,
    /// Submit user text to the active conversation.
    Submit(String),
    /// A simulated reply finished.
    ReplyReady(Reply),
    /// Cycle the sidebar display mode.
    ToggleSidebar,
    /// Ask to delete a conversation.
    RequestDelete(ConversationId),
    /// Confirm the pending deletion.
    ConfirmDelete,
    /// Dismiss the delete dialog.
    CancelDelete,
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver a simulated reply after the configured delay.
    ScheduleReply(PendingReply),
}

impl ChatShell {
    /// Apply an action and return any effect it requests.
    pub fn dispatch(&mut self, action: ShellAction) -> Option<Effect> {
        match action {
            ShellAction::Select(id) => {
                self.select_conversation(id);
                None
            }
            ShellAction::NewConversation => {
                self.create_conversation();
                None
            }
            ShellAction::Submit(text) => self.submit(&text).map(Effect::ScheduleReply),
            ShellAction::ReplyReady(reply) => {
                self.complete_reply(reply);
                None
            }
            ShellAction::ToggleSidebar => {
                self.toggle_sidebar();
                None
            }
            ShellAction::RequestDelete(id) => {
                self.request_delete(id);
                None
            }
            ShellAction::ConfirmDelete => {
                self.confirm_delete();
                None
            }
            ShellAction::CancelDelete => {
                self.cancel_delete();
                None
            }
        }
    }
}
