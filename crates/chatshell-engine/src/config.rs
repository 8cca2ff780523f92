//! Configuration types for the chatshell engine.
//!
//! The configuration is a single JSON document. Every field has a
//! default, so a partial (or empty) file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Placeholder replaced by the submitted text in [`Config::reply_template`].
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Main configuration for chatshell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Delay before the simulated reply is appended, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Maximum characters kept when a title is derived from a message.
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,

    /// Template for simulated replies. `{prompt}` is replaced by the user text.
    #[serde(default = "default_reply_template")]
    pub reply_template: String,

    /// Greeting seeded into every new conversation.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Title given to new conversations.
    #[serde(default = "default_new_conversation_title")]
    pub new_conversation_title: String,

    /// Whether the three sample conversations are loaded at startup.
    #[serde(default = "default_seed_conversations")]
    pub seed_conversations: bool,

    /// Presentation settings.
    #[serde(default)]
    pub ui: UiSettings,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_title_max_chars() -> usize {
    30
}

fn default_reply_template() -> String {
    "I'm your personal AI assistant. This is a simulated response to: \"{prompt}\"".into()
}

fn default_greeting() -> String {
    "How can I help you today?".into()
}

fn default_new_conversation_title() -> String {
    "New conversation".into()
}

fn default_seed_conversations() -> bool {
    true
}

/// Presentation settings consumed by the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiSettings {
    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon set.
    #[serde(default)]
    pub icons: IconPreference,
}

/// Named color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark grey palette of the classic assistant web UI.
    #[default]
    Classic,
    /// Catppuccin Mocha.
    Mocha,
    /// Catppuccin Latte.
    Latte,
    /// High contrast for accessibility.
    HighContrast,
}

/// Requested icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPreference {
    /// Unicode icons, ASCII when `NO_COLOR` is set.
    #[default]
    Auto,
    /// Nerd Font glyphs.
    Nerd,
    /// Standard Unicode symbols.
    Unicode,
    /// ASCII only.
    Ascii,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration from a file, or return defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// The reply delay as a [`Duration`].
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            title_max_chars: default_title_max_chars(),
            reply_template: default_reply_template(),
            greeting: default_greeting(),
            new_conversation_title: default_new_conversation_title(),
            seed_conversations: default_seed_conversations(),
            ui: UiSettings::default(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
