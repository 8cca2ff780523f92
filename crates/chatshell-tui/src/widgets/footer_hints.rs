//! Footer key-hint bar.
//!
//! Format: `Input            [Enter] send │ [Tab] sidebar │ [F1] help`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::app::Focus;
use crate::text::visual_width;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Ctrl+N").
    pub key: String,
    /// The action description (e.g., "focus", "new chat").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer hint bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    label: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            label: None,
        }
    }

    /// Set the left-hand label (focused area or overlay name).
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Hints for the focused area.
    pub fn focus_hints(focus: Focus) -> Vec<KeyHint> {
        match focus {
            Focus::Input => vec![
                KeyHint::new("Enter", "send"),
                KeyHint::new("Ctrl+N", "new"),
                KeyHint::new("Ctrl+B", "sidebar"),
                KeyHint::new("Ctrl+D", "delete"),
                KeyHint::new("Tab", "focus"),
                KeyHint::new("F1", "help"),
            ],
            Focus::Sidebar => vec![
                KeyHint::new("j/k", "move"),
                KeyHint::new("Enter", "open"),
                KeyHint::new("n", "new"),
                KeyHint::new("d", "delete"),
                KeyHint::new("Tab", "focus"),
                KeyHint::new("?", "help"),
            ],
        }
    }

    /// Hints while the delete dialog is open.
    pub fn dialog_hints() -> Vec<KeyHint> {
        vec![KeyHint::new("y/Enter", "delete"), KeyHint::new("n/Esc", "cancel")]
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if let Some(label) = self.label {
            buf.set_string(
                area.x + 1,
                area.y,
                label,
                Style::default().fg(self.theme.primary),
            );
        }

        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                hint.key.clone(),
                Style::default().fg(self.theme.primary),
            ));
            spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                hint.action.clone(),
                Style::default().fg(self.theme.subtext),
            ));
        }
        spans.push(Span::raw(" "));

        // Right-aligned after the label; drop leading hints until the bar fits
        let reserved = self.label.map_or(0, |label| visual_width(label) + 2);
        let available = usize::from(area.width).saturating_sub(reserved);
        let mut line = Line::from(spans);
        while line.width() > available && line.spans.len() > 5 {
            line.spans.drain(..5);
        }
        #[allow(clippy::cast_possible_truncation)]
        let width = line.width().min(usize::from(area.width)) as u16;
        let x = area.x + area.width - width;
        buf.set_line(x, area.y, &line, width);
    }
}
