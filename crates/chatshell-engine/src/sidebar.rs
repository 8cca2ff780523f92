//! Sidebar display modes.
//!
//! - Full: icons and titles
//! - Icons: icons only
//! - Hidden: no sidebar

use serde::{Deserialize, Serialize};

/// Visual density of the conversation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarMode {
    /// Icons and conversation titles.
    #[default]
    Full,
    /// Icons only.
    Icons,
    /// Sidebar not rendered.
    Hidden,
}

impl SidebarMode {
    /// Advance to the next mode: full, icons, hidden, then full again.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Full => Self::Icons,
            Self::Icons => Self::Hidden,
            Self::Hidden => Self::Full,
        }
    }

    /// Column width the sidebar occupies in this mode.
    pub fn width(self) -> u16 {
        match self {
            Self::Full => 30,
            Self::Icons => 5,
            Self::Hidden => 0,
        }
    }

    /// Hint describing what the next toggle will do.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Self::Full => "Collapse sidebar",
            Self::Icons => "Hide sidebar",
            Self::Hidden => "Show sidebar",
        }
    }

    /// Whether conversation titles are shown.
    pub fn shows_titles(self) -> bool {
        self == Self::Full
    }

    /// Whether the sidebar is drawn at all.
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}
