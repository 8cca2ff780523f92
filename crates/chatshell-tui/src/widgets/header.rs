//! Header bar: sidebar toggle on the left, conversation title centered.

use chatshell_engine::SidebarMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::text::{truncate_to_width, visual_width};
use crate::theme::{IconSet, Theme};

/// Single-line header widget.
pub struct Header<'a> {
    title: &'a str,
    sidebar_mode: SidebarMode,
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> Header<'a> {
    /// Create a new header.
    pub fn new(title: &'a str, sidebar_mode: SidebarMode, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            title,
            sidebar_mode,
            theme,
            icons,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.theme.base));

        let toggle = Line::from(vec![
            Span::styled(
                format!(" {} ", self.icons.menu()),
                Style::default().fg(self.theme.text),
            ),
            Span::styled(
                self.sidebar_mode.toggle_hint(),
                Style::default().fg(self.theme.muted),
            ),
        ]);
        let toggle_width = toggle.width();
        buf.set_line(area.x, area.y, &toggle, area.width);

        // Title centered, clipped so it never overwrites the toggle
        let suffix = format!(" {}", self.icons.dropdown());
        let available = usize::from(area.width)
            .saturating_sub(toggle_width + 1)
            .saturating_sub(visual_width(&suffix));
        let title = truncate_to_width(self.title, available);
        let title_width = visual_width(&title) + visual_width(&suffix);
        let centered = usize::from(area.width).saturating_sub(title_width) / 2;
        let start = centered.max(toggle_width + 1);

        #[allow(clippy::cast_possible_truncation)]
        let x = area.x + start as u16;
        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(suffix, Style::default().fg(self.theme.muted)),
        ]);
        buf.set_line(x, area.y, &line, area.width.saturating_sub(x - area.x));
    }
}
