//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

use chatshell_engine::IconPreference;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (needs a patched font).
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    #[default]
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Resolve a configured preference, honoring `NO_COLOR` for `auto`.
    pub fn from_preference(preference: IconPreference) -> Self {
        Self::resolve(preference, std::env::var_os("NO_COLOR").is_some())
    }

    /// Resolve a preference given whether `NO_COLOR` is set.
    pub fn resolve(preference: IconPreference, no_color: bool) -> Self {
        match preference {
            IconPreference::Auto if no_color => Self::Ascii,
            IconPreference::Auto | IconPreference::Unicode => Self::Unicode,
            IconPreference::Nerd => Self::Nerd,
            IconPreference::Ascii => Self::Ascii,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Sidebar ===

    pub fn new_chat(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰐕",
            IconMode::Unicode | IconMode::Ascii => "+",
        }
    }

    pub fn conversation(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰍡",
            IconMode::Unicode => "▢",
            IconMode::Ascii => "#",
        }
    }

    pub fn delete(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰆴",
            IconMode::Unicode => "✗",
            IconMode::Ascii => "x",
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰅂",
            IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }

    pub fn account(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰀄",
            IconMode::Unicode => "☺",
            IconMode::Ascii => "@",
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰒓",
            IconMode::Unicode => "⚙",
            IconMode::Ascii => "*",
        }
    }

    pub fn logout(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰍃",
            IconMode::Unicode => "⇥",
            IconMode::Ascii => "<",
        }
    }

    // === Header ===

    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰍜",
            IconMode::Unicode => "☰",
            IconMode::Ascii => "=",
        }
    }

    pub fn dropdown(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰅀",
            IconMode::Unicode => "▾",
            IconMode::Ascii => "v",
        }
    }

    // === Transcript ===

    pub fn assistant(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰚩",
            IconMode::Unicode => "◆",
            IconMode::Ascii => "[AI]",
        }
    }

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰀄",
            IconMode::Unicode => "●",
            IconMode::Ascii => "[You]",
        }
    }

    /// Frames for the "assistant is typing" pulse.
    pub fn pulse_frames(&self) -> &'static [&'static str] {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => &["●  ", "●● ", "●●●", " ●●", "  ●", "   "],
            IconMode::Ascii => &[".  ", ".. ", "...", " ..", "  .", "   "],
        }
    }

    // === Input ===

    pub fn send(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰒊",
            IconMode::Unicode => "➤",
            IconMode::Ascii => ">>",
        }
    }

    pub fn external_link(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰏌",
            IconMode::Unicode => "↗",
            IconMode::Ascii => "^",
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰀦",
            IconMode::Unicode => "⚠",
            IconMode::Ascii => "[!]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_unicode() {
        assert_eq!(IconSet::default().mode(), IconMode::Unicode);
    }

    #[test]
    fn test_resolve_auto_respects_no_color() {
        assert_eq!(IconMode::resolve(IconPreference::Auto, true), IconMode::Ascii);
        assert_eq!(IconMode::resolve(IconPreference::Auto, false), IconMode::Unicode);
    }

    #[test]
    fn test_resolve_explicit_preferences() {
        assert_eq!(IconMode::resolve(IconPreference::Nerd, true), IconMode::Nerd);
        assert_eq!(IconMode::resolve(IconPreference::Ascii, false), IconMode::Ascii);
        assert_eq!(IconMode::resolve(IconPreference::Unicode, true), IconMode::Unicode);
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for icon in [
            icons.new_chat(),
            icons.conversation(),
            icons.delete(),
            icons.menu(),
            icons.assistant(),
            icons.user(),
            icons.send(),
        ] {
            assert!(icon.is_ascii(), "{icon} should be ASCII");
        }
        assert!(icons.pulse_frames().iter().all(|f| f.is_ascii()));
    }

    #[test]
    fn test_pulse_frames_same_width() {
        let icons = IconSet::new(IconMode::Unicode);
        let frames = icons.pulse_frames();
        assert!(frames
            .iter()
            .all(|f| f.chars().count() == frames[0].chars().count()));
    }
}
