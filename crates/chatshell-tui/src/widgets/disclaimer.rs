//! Disclaimer line under the input bar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::theme::{IconSet, Theme};

/// Disclaimer text.
pub const DISCLAIMER: &str =
    "Personal AI Assistant can make mistakes. Consider checking important information.";

/// Centered disclaimer with an inert "Learn more" link.
pub struct Disclaimer<'a> {
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> Disclaimer<'a> {
    pub fn new(theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self { theme, icons }
    }
}

impl Widget for Disclaimer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let muted = Style::default().fg(self.theme.muted);
        let background = Style::default().bg(self.theme.base);

        let line = Line::from(vec![
            Span::styled(DISCLAIMER, muted),
            Span::raw(" "),
            Span::styled("Learn more", muted.add_modifier(Modifier::UNDERLINED)),
            Span::styled(format!(" {}", self.icons.external_link()), muted),
        ]);

        // Too narrow for the link: keep the left part of the sentence
        let line = if line.width() > usize::from(area.width) {
            Line::styled(truncate_to_width(DISCLAIMER, usize::from(area.width)), muted)
        } else {
            line
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(background)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_disclaimer_renders() {
        let theme = Theme::default();
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        Disclaimer::new(&theme, &icons).render(area, &mut buf);
        let output = buffer_to_string(&buf);
        assert!(output.contains("can make mistakes"));
        assert!(output.contains("Learn more ↗"));
    }

    #[test]
    fn test_narrow_disclaimer_truncates() {
        let theme = Theme::default();
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        Disclaimer::new(&theme, &icons).render(area, &mut buf);
        let output = buffer_to_string(&buf);
        assert!(output.starts_with("Personal AI Assistant can make mistakes."));
        assert!(output.ends_with('…'));
    }
}
