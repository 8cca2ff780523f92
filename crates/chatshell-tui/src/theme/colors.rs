//! Color palettes for the TUI.
//!
//! `classic` follows the dark greys of the familiar assistant web UI; the
//! Catppuccin and high-contrast palettes are alternatives selectable in
//! the config file.

use chatshell_engine::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub sidebar: Color,
    pub surface: Color,
    pub overlay: Color,
    pub selection: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub assistant: Color,
    pub user: Color,

    // Semantic
    pub danger: Color,
    pub warning: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Build the palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Classic => Self::classic(),
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark grey assistant palette (default).
    pub fn classic() -> Self {
        Self {
            base: Color::Rgb(52, 53, 65),        // #343541
            sidebar: Color::Rgb(32, 33, 35),     // #202123
            surface: Color::Rgb(68, 70, 84),     // #444654
            overlay: Color::Rgb(64, 65, 79),     // #40414f
            selection: Color::Rgb(55, 65, 81),   // gray-700

            text: Color::Rgb(243, 244, 246),     // gray-100
            subtext: Color::Rgb(209, 213, 219),  // gray-300
            muted: Color::Rgb(156, 163, 175),    // gray-400

            primary: Color::Rgb(229, 231, 235),  // gray-200
            assistant: Color::Rgb(22, 163, 74),  // green-600
            user: Color::Rgb(75, 85, 99),        // gray-600

            danger: Color::Rgb(220, 38, 38),     // red-600
            warning: Color::Rgb(250, 204, 21),   // yellow-400

            border: Color::Rgb(75, 85, 99),      // gray-600
            border_focused: Color::Rgb(156, 163, 175), // gray-400
        }
    }

    /// Catppuccin Mocha theme.
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),        // #1e1e2e
            sidebar: Color::Rgb(24, 24, 37),     // #181825
            surface: Color::Rgb(49, 50, 68),     // #313244
            overlay: Color::Rgb(69, 71, 90),     // #45475a
            selection: Color::Rgb(69, 71, 90),   // #45475a

            text: Color::Rgb(205, 214, 244),     // #cdd6f4
            subtext: Color::Rgb(166, 173, 200),  // #a6adc8
            muted: Color::Rgb(108, 112, 134),    // #6c7086

            primary: Color::Rgb(180, 190, 254),  // #b4befe (lavender)
            assistant: Color::Rgb(166, 227, 161), // #a6e3a1 (green)
            user: Color::Rgb(137, 180, 250),     // #89b4fa (blue)

            danger: Color::Rgb(243, 139, 168),   // #f38ba8 (red)
            warning: Color::Rgb(249, 226, 175),  // #f9e2af (yellow)

            border: Color::Rgb(69, 71, 90),      // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Catppuccin Latte theme (light).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),     // #eff1f5
            sidebar: Color::Rgb(230, 233, 239),  // #e6e9ef
            surface: Color::Rgb(220, 224, 232),  // #dce0e8
            overlay: Color::Rgb(204, 208, 218),  // #ccd0da
            selection: Color::Rgb(188, 192, 204), // #bcc0cc

            text: Color::Rgb(76, 79, 105),       // #4c4f69
            subtext: Color::Rgb(92, 95, 119),    // #5c5f77
            muted: Color::Rgb(140, 143, 161),    // #8c8fa1

            primary: Color::Rgb(114, 135, 253),  // #7287fd (lavender)
            assistant: Color::Rgb(64, 160, 43),  // #40a02b (green)
            user: Color::Rgb(30, 102, 245),      // #1e66f5 (blue)

            danger: Color::Rgb(210, 15, 57),     // #d20f39 (red)
            warning: Color::Rgb(223, 142, 29),   // #df8e1d (yellow)

            border: Color::Rgb(188, 192, 204),   // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            sidebar: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),
            selection: Color::Rgb(60, 60, 60),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            assistant: Color::Green,
            user: Color::LightBlue,

            danger: Color::Red,
            warning: Color::Yellow,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}
