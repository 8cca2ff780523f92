//! Delete-confirmation dialog overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::layout::centered_fixed;
use crate::theme::{BorderSet, Theme};

/// Dialog title.
pub const TITLE: &str = "Delete conversation";
/// Dialog body.
pub const BODY: &str =
    "Are you sure you want to delete this conversation? This action cannot be undone.";

const WIDTH: u16 = 50;
const HEIGHT: u16 = 8;

/// Modal asking to confirm a deletion.
pub struct DeleteDialogOverlay<'a> {
    theme: &'a Theme,
    borders: &'a BorderSet,
    conversation_title: Option<&'a str>,
}

impl<'a> DeleteDialogOverlay<'a> {
    /// Create the overlay.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            theme,
            borders,
            conversation_title: None,
        }
    }

    /// Name the conversation being deleted.
    #[must_use]
    pub fn conversation_title(mut self, title: Option<&'a str>) -> Self {
        self.conversation_title = title;
        self
    }
}

impl Widget for DeleteDialogOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = WIDTH.min(area.width.saturating_sub(2));
        let height = HEIGHT.min(area.height.saturating_sub(2));
        let dialog_area = centered_fixed(width, height, area);

        Clear.render(dialog_area, buf);

        let mut block = Block::default()
            .title(format!(" {TITLE} "))
            .title_style(
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_set(self.borders.focused())
            .border_style(Style::default().fg(self.theme.danger))
            .style(Style::default().bg(self.theme.sidebar).fg(self.theme.text));
        if let Some(title) = self.conversation_title {
            block = block.title_bottom(Line::from(format!(" {title} ")).right_aligned());
        }

        let muted = Style::default().fg(self.theme.muted);
        let lines = vec![
            Line::from(BODY),
            Line::default(),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(self.theme.danger)),
                Span::raw(" Delete  "),
                Span::styled("[Esc]", muted),
                Span::raw(" Cancel"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(dialog_area, buf);
    }
}
