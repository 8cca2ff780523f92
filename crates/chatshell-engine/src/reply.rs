//! Simulated assistant replies.
//!
//! Stands in for a model invocation: a [`Responder`] turns the user's text
//! into reply text, and [`deliver_reply`] waits out the configured delay
//! before handing the finished [`Reply`] back to whoever owns the
//! [`crate::ChatShell`].

use crate::chat::ConversationId;
use crate::config::PROMPT_PLACEHOLDER;
use std::sync::Arc;
use std::time::Duration;

/// Produces reply text for a user message.
pub trait Responder: Send + Sync {
    /// Build the reply to `prompt`.
    fn respond(&self, prompt: &str) -> String;
}

/// Responder that fills a fixed template with the user's text.
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    template: String,
}

impl ScriptedResponder {
    /// Create a responder from a template containing `{prompt}`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for ScriptedResponder {
    fn default() -> Self {
        Self::new(crate::Config::default().reply_template)
    }
}

impl Responder for ScriptedResponder {
    fn respond(&self, prompt: &str) -> String {
        self.template.replace(PROMPT_PLACEHOLDER, prompt)
    }
}

/// A reply that has been requested but not yet delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Conversation the user message was submitted to.
    pub conversation_id: ConversationId,
    /// The submitted text.
    pub prompt: String,
}

/// A finished reply, ready to be applied with [`crate::ChatShell::complete_reply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Conversation the reply belongs to.
    pub conversation_id: ConversationId,
    /// Reply text.
    pub content: String,
}

impl PendingReply {
    /// Produce the reply immediately, without waiting.
    pub fn resolve(&self, responder: &dyn Responder) -> Reply {
        Reply {
            conversation_id: self.conversation_id,
            content: responder.respond(&self.prompt),
        }
    }
}

/// Wait for `delay`, then produce the reply for `pending`.
pub async fn deliver_reply(
    pending: PendingReply,
    responder: Arc<dyn Responder>,
    delay: Duration,
) -> Reply {
    tracing::debug!(
        conversation = %pending.conversation_id,
        delay_ms = delay.as_millis(),
        "Simulating reply"
    );
    tokio::time::sleep(delay).await;
    pending.resolve(responder.as_ref())
}
