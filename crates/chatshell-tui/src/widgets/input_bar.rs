//! Full-width input bar widget.
//!
//! Single-line entry with a `> ` prompt and a send glyph on the right.
//! The view scrolls horizontally so the cursor stays visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::input::TextInputState;
use crate::text::visual_width;
use crate::theme::{BorderSet, IconSet, Theme};

/// Placeholder shown while the input is empty.
pub const PLACEHOLDER: &str = "Message your AI assistant...";

const PROMPT: &str = "> ";
const CURSOR: &str = "█";

/// Characters to skip so the cursor fits in `width` columns.
fn horizontal_offset(chars: &[char], cursor: usize, width: usize) -> usize {
    let mut start = 0;
    // one column reserved for the cursor block
    while start < cursor {
        let used: usize = chars[start..cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        if used < width {
            break;
        }
        start += 1;
    }
    start
}

/// Input bar for composing messages.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(
        input: &'a TextInputState,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            input,
            theme,
            icons,
            borders,
            focused: false,
        }
    }

    /// Set whether the input bar is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn content_line(&self, width: usize) -> Line<'static> {
        let mut spans = vec![Span::styled(PROMPT, Style::default().fg(self.theme.muted))];
        let width = width.saturating_sub(PROMPT.len());

        if self.input.is_empty() {
            if self.focused {
                spans.push(Span::raw(CURSOR));
            }
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().fg(self.theme.muted),
            ));
            return Line::from(spans);
        }

        let chars: Vec<char> = self.input.content().chars().collect();
        let cursor = self.input.cursor();
        let start = horizontal_offset(&chars, cursor, width);
        let before: String = chars[start..cursor].iter().collect();
        let after: String = chars[cursor..].iter().collect();

        spans.push(Span::raw(before));
        if self.focused {
            spans.push(Span::raw(CURSOR));
        }
        spans.push(Span::raw(after));
        Line::from(spans)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.for_focus(self.focused))
            .border_style(border_style)
            .style(Style::default().bg(self.theme.overlay).fg(self.theme.text));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let send = self.icons.send();
        let send_width = visual_width(send);
        // text, one gap column, then the send glyph
        let text_width = usize::from(inner.width).saturating_sub(send_width + 2);

        let line = self.content_line(text_width);
        #[allow(clippy::cast_possible_truncation)]
        buf.set_line(inner.x + 1, inner.y, &line, text_width as u16);

        let send_style = if self.input.is_blank() {
            Style::default().fg(self.theme.muted)
        } else {
            Style::default().fg(self.theme.primary)
        };
        #[allow(clippy::cast_possible_truncation)]
        let x = (inner.x + inner.width).saturating_sub(send_width as u16 + 1);
        buf.set_string(x, inner.y, send, send_style);
    }
}
