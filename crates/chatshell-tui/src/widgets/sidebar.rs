//! Conversation sidebar widget.
//!
//! Full mode: `New chat`, a `Today` heading, one row per conversation and
//! the account menu at the bottom. Icons mode keeps a single glyph column.

use chatshell_engine::{ChatShell, SidebarMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::text::{truncate_to_width, visual_width};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};

/// Rows above the conversation list: `New chat`, spacer, `Today`.
const LIST_TOP: u16 = 3;
/// Rows below the conversation list: separator plus three account rows.
const ACCOUNT_ROWS: u16 = 4;

/// Account menu entries (inert).
const ACCOUNT_MENU: [&str; 3] = ["My Account", "Settings", "Log out"];

/// First list row to draw so that `selected` stays visible.
pub fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    (selected + 1).saturating_sub(visible_rows)
}

/// Sidebar listing the conversations.
pub struct Sidebar<'a> {
    shell: &'a ChatShell,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
    cursor: usize,
}

impl<'a> Sidebar<'a> {
    /// Create a new sidebar widget.
    pub fn new(
        shell: &'a ChatShell,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            shell,
            theme,
            icons,
            borders,
            focused: false,
            cursor: 0,
        }
    }

    /// Set whether the sidebar has focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the highlighted row (used while focused).
    #[must_use]
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    fn selected_row(&self) -> usize {
        if self.focused {
            self.cursor
        } else {
            self.shell
                .active_id()
                .and_then(|id| self.shell.position(id))
                .unwrap_or(0)
        }
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let full = self.shell.sidebar_mode().shows_titles();
        let active = self.shell.active_id();
        let selected = self.selected_row();
        let visible = usize::from(area.height);
        let offset = scroll_offset(selected, visible);

        for (row, (index, conversation)) in self
            .shell
            .conversations()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + row as u16;
            let row_area = Rect::new(area.x, y, area.width, 1);
            let is_active = Some(conversation.id) == active;
            let is_cursor = self.focused && index == self.cursor;

            let mut style = Style::default().fg(self.theme.subtext);
            if is_active {
                style = style.bg(self.theme.selection).fg(self.theme.text);
            }
            if is_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            buf.set_style(row_area, style);

            let marker = if is_cursor { self.icons.cursor() } else { " " };
            let icon_style = if self.shell.is_awaiting_reply(conversation.id) {
                style.fg(self.theme.assistant)
            } else {
                style
            };

            if full {
                let delete = if is_active || is_cursor {
                    self.icons.delete()
                } else {
                    ""
                };
                // marker + icon + space, then title, then " x "
                let fixed = visual_width(marker) + visual_width(self.icons.conversation()) + 1;
                let reserved = if delete.is_empty() {
                    1
                } else {
                    visual_width(delete) + 2
                };
                let title_width = usize::from(area.width).saturating_sub(fixed + reserved);
                let title = truncate_to_width(&conversation.title, title_width);

                let line = Line::from(vec![
                    Span::styled(marker, style.fg(self.theme.primary)),
                    Span::styled(self.icons.conversation(), icon_style),
                    Span::styled(" ", style),
                    Span::styled(title, style),
                ]);
                buf.set_line(area.x, y, &line, area.width);

                if !delete.is_empty() {
                    #[allow(clippy::cast_possible_truncation)]
                    let x = (area.x + area.width).saturating_sub(visual_width(delete) as u16 + 1);
                    buf.set_string(x, y, delete, style.fg(self.theme.danger));
                }
            } else {
                let line = Line::from(vec![
                    Span::styled(marker, style.fg(self.theme.primary)),
                    Span::styled(self.icons.conversation(), icon_style),
                ]);
                buf.set_line(area.x, y, &line, area.width);
            }
        }
    }

    fn render_account_menu(&self, area: Rect, buf: &mut Buffer) {
        let full = self.shell.sidebar_mode().shows_titles();
        let rule_glyph = if self.icons.mode() == IconMode::Ascii {
            "-"
        } else {
            "─"
        };
        let rule = rule_glyph.repeat(usize::from(area.width));
        buf.set_string(area.x, area.y, rule, Style::default().fg(self.theme.border));

        let glyphs = [self.icons.account(), self.icons.settings(), self.icons.logout()];
        for (i, (label, glyph)) in ACCOUNT_MENU.iter().zip(glyphs).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let text = if full {
                format!(" {glyph} {label}")
            } else {
                format!(" {glyph}")
            };
            buf.set_string(area.x, y, text, Style::default().fg(self.theme.subtext));
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.shell.sidebar_mode() == SidebarMode::Hidden || area.width == 0 {
            return;
        }

        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_set(self.borders.for_focus(self.focused))
            .border_style(border_style)
            .style(Style::default().bg(self.theme.sidebar));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let full = self.shell.sidebar_mode().shows_titles();
        let new_chat = if full {
            format!(" {} New chat", self.icons.new_chat())
        } else {
            format!(" {}", self.icons.new_chat())
        };
        buf.set_string(
            inner.x,
            inner.y,
            new_chat,
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        );

        if full && inner.height > 2 {
            buf.set_string(
                inner.x + 1,
                inner.y + 2,
                "Today",
                Style::default().fg(self.theme.muted),
            );
        }

        let menu_height = if inner.height > LIST_TOP + ACCOUNT_ROWS {
            ACCOUNT_ROWS
        } else {
            0
        };
        let list_area = Rect::new(
            inner.x,
            inner.y + LIST_TOP.min(inner.height),
            inner.width,
            inner
                .height
                .saturating_sub(LIST_TOP)
                .saturating_sub(menu_height),
        );
        self.render_rows(list_area, buf);

        if menu_height > 0 {
            let menu_area = Rect::new(
                inner.x,
                inner.y + inner.height - menu_height,
                inner.width,
                menu_height,
            );
            self.render_account_menu(menu_area, buf);
        }
    }
}
