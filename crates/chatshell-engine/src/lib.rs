//! chatshell-engine: Headless core for the chatshell assistant UI
//!
//! This crate provides the chat state machine behind the TUI, including:
//! - Conversation and message model
//! - Conversation selection, creation and confirmed deletion
//! - Sidebar display modes
//! - Simulated (scripted) assistant replies
//! - Configuration

pub mod action;
pub mod chat;
pub mod config;
pub mod reply;
pub mod shell;
pub mod sidebar;

// Re-export commonly used types
pub use action::{Effect, ShellAction};
pub use chat::{title_from_message, Conversation, ConversationId, Message, Role};
pub use config::{Config, ConfigError, IconPreference, ThemeName, UiSettings};
pub use reply::{deliver_reply, PendingReply, Reply, Responder, ScriptedResponder};
pub use shell::{ChatShell, DeleteDialog, DEFAULT_TITLE};
pub use sidebar::SidebarMode;

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
