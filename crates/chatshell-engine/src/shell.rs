//! The chat shell state machine.
//!
//! [`ChatShell`] owns every piece of chat state: the conversation store,
//! the active pointer, the sidebar mode, the delete dialog and the set of
//! outstanding simulated replies. All transitions are plain methods, so
//! the shell can be driven and tested without any rendering layer.

use crate::chat::{title_from_message, Conversation, ConversationId, Message};
use crate::config::Config;
use crate::reply::{PendingReply, Reply};
use crate::sidebar::SidebarMode;
use tracing::{debug, warn};

/// Sample conversations loaded at startup: (title, greeting).
const SEED_CONVERSATIONS: [(&str, &str); 3] = [
    (
        "Welcome to your AI assistant",
        "Hello! I'm your personal AI assistant. How can I help you today?",
    ),
    (
        "Learning about machine learning",
        "What would you like to know about machine learning?",
    ),
    (
        "Project planning assistance",
        "I can help you plan your project. What are you working on?",
    ),
];

/// Header title used when no conversation is active.
pub const DEFAULT_TITLE: &str = "Personal AI Assistant";

/// State of the delete-confirmation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteDialog {
    /// Whether the dialog is shown.
    pub visible: bool,
    /// Conversation the dialog asks about.
    pub target: Option<ConversationId>,
}

impl DeleteDialog {
    fn open(&mut self, id: ConversationId) {
        self.visible = true;
        self.target = Some(id);
    }

    fn close(&mut self) {
        self.visible = false;
        self.target = None;
    }
}

/// Conversation store plus all UI-facing chat state.
#[derive(Debug, Clone)]
pub struct ChatShell {
    conversations: Vec<Conversation>,
    active: Option<ConversationId>,
    next_id: u64,
    sidebar: SidebarMode,
    delete_dialog: DeleteDialog,
    /// One entry per outstanding reply, keyed by originating conversation.
    pending: Vec<ConversationId>,
    title_max_chars: usize,
    greeting: String,
    new_conversation_title: String,
}

impl Default for ChatShell {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ChatShell {
    /// Create a shell from configuration.
    ///
    /// Loads the sample conversations when `seed_conversations` is set,
    /// otherwise starts with a single fresh conversation.
    pub fn new(config: &Config) -> Self {
        let mut shell = Self {
            conversations: Vec::new(),
            active: None,
            next_id: 1,
            sidebar: SidebarMode::default(),
            delete_dialog: DeleteDialog::default(),
            pending: Vec::new(),
            title_max_chars: config.title_max_chars,
            greeting: config.greeting.clone(),
            new_conversation_title: config.new_conversation_title.clone(),
        };

        if config.seed_conversations {
            for (title, greeting) in SEED_CONVERSATIONS {
                let id = shell.allocate_id();
                shell
                    .conversations
                    .push(Conversation::new(id, title, greeting));
            }
            shell.active = shell.conversations.first().map(|c| c.id);
        } else {
            shell.create_conversation();
        }

        shell
    }

    fn allocate_id(&mut self) -> ConversationId {
        let id = ConversationId(self.next_id);
        self.next_id += 1;
        id
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// All conversations, newest-created first.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Look up a conversation by id.
    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Index of a conversation in the list.
    pub fn position(&self, id: ConversationId) -> Option<usize> {
        self.conversations.iter().position(|c| c.id == id)
    }

    /// Id of the active conversation.
    pub fn active_id(&self) -> Option<ConversationId> {
        self.active
    }

    /// The active conversation.
    pub fn active(&self) -> Option<&Conversation> {
        self.active.and_then(|id| self.conversation(id))
    }

    /// Messages of the active conversation.
    pub fn transcript(&self) -> &[Message] {
        self.active()
            .map(|c| c.messages.as_slice())
            .unwrap_or_default()
    }

    /// Title for the header: the active conversation's, or the app name.
    pub fn header_title(&self) -> &str {
        self.active().map_or(DEFAULT_TITLE, |c| c.title.as_str())
    }

    /// Whether any simulated reply is outstanding.
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Whether a reply is outstanding for `id`.
    pub fn is_awaiting_reply(&self, id: ConversationId) -> bool {
        self.pending.contains(&id)
    }

    /// Number of outstanding replies.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Current sidebar mode.
    pub fn sidebar_mode(&self) -> SidebarMode {
        self.sidebar
    }

    /// Delete dialog state.
    pub fn delete_dialog(&self) -> DeleteDialog {
        self.delete_dialog
    }

    // ------------------------------------------------------------------
    // Conversation list
    // ------------------------------------------------------------------

    /// Make `id` the active conversation.
    ///
    /// Returns `false` when `id` is already active or does not exist.
    pub fn select_conversation(&mut self, id: ConversationId) -> bool {
        if self.active == Some(id) || self.conversation(id).is_none() {
            return false;
        }
        debug!(conversation = %id, "Selecting conversation");
        self.active = Some(id);
        true
    }

    /// Create a greeted conversation at the front of the list and activate it.
    pub fn create_conversation(&mut self) -> ConversationId {
        let id = self.allocate_id();
        let conversation = Conversation::new(id, &self.new_conversation_title, &self.greeting);
        self.conversations.insert(0, conversation);
        self.active = Some(id);
        debug!(conversation = %id, "Created conversation");
        id
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// Submit user text to the active conversation.
    ///
    /// Whitespace-only text is ignored. On the conversation's first user
    /// message the title is rewritten from the text. Returns the reply
    /// the caller must deliver later.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            debug!("Ignoring empty submission");
            return None;
        }
        let id = self.active?;
        let max_chars = self.title_max_chars;
        let conversation = self.conversations.iter_mut().find(|c| c.id == id)?;

        let first_user_message = !conversation.has_user_message();
        conversation.push(Message::user(text));
        if first_user_message {
            conversation.rename(title_from_message(text, max_chars));
        }

        self.pending.push(id);
        debug!(conversation = %id, pending = self.pending.len(), "User message submitted");

        Some(PendingReply {
            conversation_id: id,
            prompt: text.to_string(),
        })
    }

    /// Apply a delivered reply to the conversation it was requested for.
    ///
    /// The reply goes to its originating conversation even if another one
    /// is active now. If that conversation was deleted the reply is
    /// dropped. Either way the outstanding entry is cleared. Returns
    /// whether the reply was appended.
    pub fn complete_reply(&mut self, reply: Reply) -> bool {
        if let Some(index) = self
            .pending
            .iter()
            .position(|id| *id == reply.conversation_id)
        {
            self.pending.remove(index);
        }

        match self
            .conversations
            .iter_mut()
            .find(|c| c.id == reply.conversation_id)
        {
            Some(conversation) => {
                conversation.push(Message::assistant(reply.content));
                debug!(conversation = %reply.conversation_id, "Reply delivered");
                true
            }
            None => {
                warn!(
                    conversation = %reply.conversation_id,
                    "Dropping reply for deleted conversation"
                );
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------

    /// Advance the sidebar to its next display mode.
    pub fn toggle_sidebar(&mut self) -> SidebarMode {
        self.sidebar = self.sidebar.toggle();
        debug!(mode = ?self.sidebar, "Sidebar toggled");
        self.sidebar
    }

    // ------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------

    /// Open the delete dialog for `id`. Unknown ids are ignored.
    pub fn request_delete(&mut self, id: ConversationId) -> bool {
        if self.conversation(id).is_none() {
            return false;
        }
        self.delete_dialog.open(id);
        true
    }

    /// Delete the dialog's target and close the dialog.
    ///
    /// If the target was active, the first remaining conversation becomes
    /// active, or a fresh one is created when none remain. Returns the id
    /// of the removed conversation.
    pub fn confirm_delete(&mut self) -> Option<ConversationId> {
        let target = self.delete_dialog.target;
        self.delete_dialog.close();

        let id = target?;
        let index = self.position(id)?;
        self.conversations.remove(index);
        debug!(conversation = %id, remaining = self.conversations.len(), "Deleted conversation");

        if self.active == Some(id) {
            match self.conversations.first() {
                Some(first) => self.active = Some(first.id),
                None => {
                    self.active = None;
                    self.create_conversation();
                }
            }
        }

        Some(id)
    }

    /// Close the delete dialog without deleting anything.
    pub fn cancel_delete(&mut self) {
        self.delete_dialog.close();
    }
}
