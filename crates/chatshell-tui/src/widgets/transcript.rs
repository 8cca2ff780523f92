//! Transcript widget for the active conversation.
//!
//! Each message renders as a badge line (role glyph, name, time) followed
//! by its wrapped content. Assistant messages sit on a tinted background.
//! The view is anchored at the newest line and scrolls upward.

use chatshell_engine::{Message, Role};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::text::wrap_text;
use crate::theme::{IconSet, Theme};

/// Left indent of message bodies.
const BODY_INDENT: &str = "  ";

/// Build the display lines for a transcript.
///
/// `pulse_frame` appends the typing indicator when set.
pub fn transcript_lines(
    messages: &[Message],
    pulse_frame: Option<usize>,
    width: u16,
    theme: &Theme,
    icons: &IconSet,
) -> Vec<Line<'static>> {
    let body_width = usize::from(width).saturating_sub(BODY_INDENT.len() * 2).max(1);
    let mut lines = Vec::new();

    for message in messages {
        let (glyph, accent, block_style) = match message.role {
            Role::Assistant => (
                icons.assistant(),
                theme.assistant,
                Style::default().bg(theme.surface).fg(theme.text),
            ),
            Role::User => (
                icons.user(),
                theme.user,
                Style::default().bg(theme.base).fg(theme.text),
            ),
        };

        lines.push(
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    glyph.to_string(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    message.role.label().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", message.timestamp.format("%H:%M")),
                    Style::default().fg(theme.muted),
                ),
            ])
            .style(block_style),
        );

        for row in wrap_text(&message.content, body_width) {
            lines.push(Line::from(format!("{BODY_INDENT}{row}")).style(block_style));
        }
        lines.push(Line::default().style(block_style));
    }

    if let Some(frame) = pulse_frame {
        let frames = icons.pulse_frames();
        let style = Style::default().bg(theme.surface).fg(theme.text);
        lines.push(
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    icons.assistant().to_string(),
                    Style::default()
                        .fg(theme.assistant)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    frames[frame % frames.len()].to_string(),
                    Style::default().fg(theme.muted),
                ),
            ])
            .style(style),
        );
    }

    lines
}

/// Largest scroll offset for `total` lines in a view of `height` rows.
pub fn max_scroll(total: usize, height: usize) -> usize {
    total.saturating_sub(height)
}

/// Transcript view over prebuilt lines.
///
/// Lines come from [`transcript_lines`] so the caller can measure them
/// once per frame.
pub struct Transcript<'a> {
    lines: &'a [Line<'static>],
    theme: &'a Theme,
    scroll: usize,
}

impl<'a> Transcript<'a> {
    /// Create a new transcript view.
    pub fn new(lines: &'a [Line<'static>], theme: &'a Theme) -> Self {
        Self {
            lines,
            theme,
            scroll: 0,
        }
    }

    /// Lines scrolled up from the bottom.
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.theme.base));

        let height = usize::from(area.height);
        let scroll = self.scroll.min(max_scroll(self.lines.len(), height));
        let end = self.lines.len() - scroll;
        let start = end.saturating_sub(height);

        for (row, line) in self.lines[start..end].iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + row as u16;
            buf.set_style(Rect::new(area.x, y, area.width, 1), line.style);
            buf.set_line(area.x, y, line, area.width);
        }
    }
}
