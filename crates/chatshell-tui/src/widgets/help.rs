//! Help overlay listing key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_fixed;
use crate::theme::{BorderSet, Theme};

const HELP_TEXT: &str = "
  Ctrl+N            New chat
  Ctrl+B            Cycle sidebar (full/icons/hidden)
  Ctrl+D            Delete conversation
  Tab               Switch sidebar / input focus
  Up/Down, j/k      Move in sidebar, input history
  PageUp/PageDown   Scroll transcript
  Enter             Send / open conversation
  Esc               Clear input / back
  Ctrl+C            Quit

  [Press any key to close]
";

/// Help overlay widget.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self { theme, borders }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 56.min(area.width.saturating_sub(4));
        let height = 15.min(area.height.saturating_sub(2));
        let overlay_area = centered_fixed(width, height, area);

        Clear.render(overlay_area, buf);

        let block = Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_set(self.borders.focused())
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.sidebar).fg(self.theme.text));

        Paragraph::new(HELP_TEXT)
            .block(block)
            .render(overlay_area, buf);
    }
}
