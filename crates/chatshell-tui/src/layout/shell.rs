//! Main chat layout.
//!
//! Regions:
//! 1. Sidebar (left, width from the sidebar mode)
//! 2. Header (1 line)
//! 3. Transcript (expands)
//! 4. Input bar (3 lines)
//! 5. Disclaimer (1 line)
//! 6. Footer hints (1 line)
//!
//! The delete dialog and help overlays are drawn on top.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::{App, Focus};
use crate::widgets::{
    max_scroll, transcript_lines, DeleteDialogOverlay, Disclaimer, FooterHints, Header,
    HelpOverlay, InputBar, Sidebar, Transcript,
};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;

/// Render the whole application into `buf`.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(app, area, buf);
        return;
    }

    buf.set_style(area, Style::default().bg(app.theme.base).fg(app.theme.text));

    let sidebar_width = app.shell.sidebar_mode().width().min(area.width / 2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(area);

    if sidebar_width > 0 {
        Sidebar::new(&app.shell, &app.theme, &app.icons, &app.borders)
            .focused(app.focus == Focus::Sidebar)
            .cursor(app.sidebar_cursor)
            .render(columns[0], buf);
    }

    render_main_column(app, columns[1], buf);

    let dialog = app.shell.delete_dialog();
    if dialog.visible {
        let title = dialog
            .target
            .and_then(|id| app.shell.conversation(id))
            .map(|c| c.title.as_str());
        DeleteDialogOverlay::new(&app.theme, &app.borders)
            .conversation_title(title)
            .render(area, buf);
    }

    if app.show_help {
        HelpOverlay::new(&app.theme, &app.borders).render(area, buf);
    }
}

fn render_main_column(app: &App, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Transcript (expands)
            Constraint::Length(3), // Input bar
            Constraint::Length(1), // Disclaimer
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    Header::new(
        app.shell.header_title(),
        app.shell.sidebar_mode(),
        &app.theme,
        &app.icons,
    )
    .render(rows[0], buf);

    let messages = app.shell.transcript();
    let pulse = app
        .shell
        .active_id()
        .filter(|id| app.shell.is_awaiting_reply(*id))
        .map(|_| app.tick);

    let lines = transcript_lines(messages, pulse, rows[1].width, &app.theme, &app.icons);
    // Record the scroll bound for the next scroll action
    app.transcript_max_scroll
        .set(max_scroll(lines.len(), usize::from(rows[1].height)));

    Transcript::new(&lines, &app.theme)
        .scroll(app.transcript_scroll)
        .render(rows[1], buf);

    InputBar::new(&app.input, &app.theme, &app.icons, &app.borders)
        .focused(app.focus == Focus::Input && !app.shell.delete_dialog().visible)
        .render(rows[2], buf);

    Disclaimer::new(&app.theme, &app.icons).render(rows[3], buf);

    let (hints, label) = if app.shell.delete_dialog().visible {
        (FooterHints::dialog_hints(), "Delete?")
    } else {
        match app.focus {
            Focus::Input => (FooterHints::focus_hints(Focus::Input), "Input"),
            Focus::Sidebar => (FooterHints::focus_hints(Focus::Sidebar), "Sidebar"),
        }
    };
    FooterHints::new(&hints, &app.theme)
        .label(label)
        .render(rows[4], buf);
}

fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let message = format!(
        "{} Terminal too small ({}x{}). Need at least {MIN_WIDTH}x{MIN_HEIGHT}.",
        app.icons.warning(),
        area.width,
        area.height
    );
    Paragraph::new(message)
        .style(Style::default().fg(app.theme.warning))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use crate::test_utils::{create_test_app, render_app_to_string, render_app_to_string_sized};
    use crate::widgets::PLACEHOLDER;

    #[test]
    fn test_default_screen() {
        let app = create_test_app();
        let output = render_app_to_string(&app);
        assert!(output.contains("New chat"));
        assert!(output.contains("Welcome to your AI assistant"));
        assert!(output.contains("Hello! I'm your personal AI assistant."));
        assert!(output.contains(PLACEHOLDER));
        assert!(output.contains("can make mistakes"));
        assert!(output.contains("Collapse sidebar"));
    }

    #[test]
    fn test_too_small_terminal() {
        let app = create_test_app();
        let output = render_app_to_string_sized(&app, 30, 10);
        assert!(output.contains("Terminal too small"));
        assert!(!output.contains("New chat"));
    }

    #[test]
    fn test_hidden_sidebar_frees_space() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleSidebar);
        app.handle_action(Action::ToggleSidebar);
        let output = render_app_to_string(&app);
        assert!(!output.contains("New chat"));
        assert!(output.contains("Show sidebar"));
    }

    #[test]
    fn test_dialog_overlay_rendered() {
        let mut app = create_test_app();
        app.handle_action(Action::DeleteConversation);
        let output = render_app_to_string(&app);
        assert!(output.contains("Delete conversation"));
        assert!(output.contains("[n/Esc] cancel"));
    }

    #[test]
    fn test_help_overlay_rendered() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        let output = render_app_to_string(&app);
        assert!(output.contains("Press any key to close"));
    }

    #[test]
    fn test_pulse_only_in_awaiting_conversation() {
        let mut app = create_test_app();
        app.input.insert_str("hello");
        app.submit_input();
        app.tick = 2;
        assert!(render_app_to_string(&app).contains("●●●"));

        app.handle_action(Action::NewChat);
        assert!(!render_app_to_string(&app).contains("●●●"));
    }

    #[test]
    fn test_render_records_scroll_bound() {
        let mut app = create_test_app();
        for i in 0..10 {
            app.input.insert_str(&format!("message {i}"));
            app.submit_input();
        }
        render_app_to_string(&app);
        assert!(app.transcript_max_scroll.get() > 0);
    }

    #[test]
    fn test_scroll_bound_matches_drawn_lines() {
        let mut app = create_test_app();
        for i in 0..6 {
            app.input.insert_str(&format!("question number {i}"));
            app.submit_input();
        }
        render_app_to_string(&app);

        // 80x24 with the full sidebar: 50 columns, 18 transcript rows, pulse shown
        let pulse = Some(app.tick);
        let lines = transcript_lines(app.shell.transcript(), pulse, 50, &app.theme, &app.icons);
        assert_eq!(app.transcript_max_scroll.get(), max_scroll(lines.len(), 18));
    }
}

#[cfg(test)]
mod snapshot_tests {
    use crate::event::Action;
    use crate::test_utils::{create_test_app_with_icons, render_app_to_string};
    use chatshell_engine::IconPreference;
    use insta::assert_snapshot;

    // Message timestamps follow the wall clock
    const TIME_FILTER: (&str, &str) = (r"\d{2}:\d{2}", "hh:mm");

    #[test]
    fn test_snapshot_default_screen() {
        let app = create_test_app_with_icons(IconPreference::Ascii);
        let output = render_app_to_string(&app);
        insta::with_settings!({filters => vec![TIME_FILTER]}, {
            assert_snapshot!(output, @r"
         + New chat                  │ = Collapse sidebar Welcome to your AI assistant v
                                     │ [AI] Assistant  hh:mm
         Today                       │  Hello! I'm your personal AI assistant. How can
         # Welcome to your AI ass… x │  I help you today?
         # Learning about machine l… │
         # Project planning assista… │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │
                                     │╔════════════════════════════════════════════════╗
        -----------------------------│║ > █Message your AI assistant...             >> ║
         @ My Account                │╚════════════════════════════════════════════════╝
         * Settings                  │Personal AI Assistant can make mistakes. Consider…
         < Log out                   │ Input  [Ctrl+D] delete │ [Tab] focus │ [F1] help
        ");
        });
    }

    #[test]
    fn test_snapshot_icons_sidebar() {
        let mut app = create_test_app_with_icons(IconPreference::Ascii);
        app.handle_action(Action::ToggleSidebar);
        let output = render_app_to_string(&app);
        insta::with_settings!({filters => vec![TIME_FILTER]}, {
            assert_snapshot!(output, @r"
         +  │ = Hide sidebar       Welcome to your AI assistant v
            │ [AI] Assistant  hh:mm
            │  Hello! I'm your personal AI assistant. How can I help you today?
         #  │
         #  │
         #  │
            │
            │
            │
            │
            │
            │
            │
            │
            │
            │
            │
            │
            │
            │╔═════════════════════════════════════════════════════════════════════════╗
        ----│║ > █Message your AI assistant...                                      >> ║
         @  │╚═════════════════════════════════════════════════════════════════════════╝
         *  │Personal AI Assistant can make mistakes. Consider checking important infor…
         <  │ Input        [Ctrl+B] sidebar │ [Ctrl+D] delete │ [Tab] focus │ [F1] help
        ");
        });
    }

    #[test]
    fn test_snapshot_hidden_sidebar() {
        let mut app = create_test_app_with_icons(IconPreference::Ascii);
        app.handle_action(Action::ToggleSidebar);
        app.handle_action(Action::ToggleSidebar);
        let output = render_app_to_string(&app);
        insta::with_settings!({filters => vec![TIME_FILTER]}, {
            assert_snapshot!(output, @r"
         = Show sidebar          Welcome to your AI assistant v
         [AI] Assistant  hh:mm
          Hello! I'm your personal AI assistant. How can I help you today?
















        ╔══════════════════════════════════════════════════════════════════════════════╗
        ║ > █Message your AI assistant...                                           >> ║
        ╚══════════════════════════════════════════════════════════════════════════════╝
        Personal AI Assistant can make mistakes. Consider checking important informatio…
         Input             [Ctrl+B] sidebar │ [Ctrl+D] delete │ [Tab] focus │ [F1] help
        ");
        });
    }

    #[test]
    fn test_snapshot_delete_dialog() {
        let mut app = create_test_app_with_icons(IconPreference::Ascii);
        app.handle_action(Action::DeleteConversation);
        let output = render_app_to_string(&app);
        insta::with_settings!({filters => vec![TIME_FILTER]}, {
            assert_snapshot!(output, @r"
         + New chat                  │ = Collapse sidebar Welcome to your AI assistant v
                                     │ [AI] Assistant  hh:mm
         Today                       │  Hello! I'm your personal AI assistant. How can
         # Welcome to your AI ass… x │  I help you today?
         # Learning about machine l… │
         # Project planning assista… │
                                     │
                                     │
                       ╔ Delete conversation ═══════════════════════════╗
                       ║Are you sure you want to delete this            ║
                       ║conversation? This action cannot be undone.     ║
                       ║                                                ║
                       ║[Enter] Delete  [Esc] Cancel                    ║
                       ║                                                ║
                       ║                                                ║
                       ╚══════════════════ Welcome to your AI assistant ╝
                                     │
                                     │
                                     │
                                     │┌────────────────────────────────────────────────┐
        -----------------------------││ > Message your AI assistant...              >> │
         @ My Account                │└────────────────────────────────────────────────┘
         * Settings                  │Personal AI Assistant can make mistakes. Consider…
         < Log out                   │ Delete?        [y/Enter] delete │ [n/Esc] cancel
        ");
        });
    }

    #[test]
    fn test_snapshot_help_overlay() {
        let mut app = create_test_app_with_icons(IconPreference::Ascii);
        app.handle_action(Action::Help);
        let output = render_app_to_string(&app);
        insta::with_settings!({filters => vec![TIME_FILTER]}, {
            assert_snapshot!(output, @r"
         + New chat                  │ = Collapse sidebar Welcome to your AI assistant v
                                     │ [AI] Assistant  hh:mm
         Today                       │  Hello! I'm your personal AI assistant. How can
         # Welcome to your AI ass… x │  I help you today?
         # Learning ╔ Help ════════════════════════════════════════════════╗
         # Project p║                                                      ║
                    ║  Ctrl+N            New chat                          ║
                    ║  Ctrl+B            Cycle sidebar (full/icons/hidden) ║
                    ║  Ctrl+D            Delete conversation               ║
                    ║  Tab               Switch sidebar / input focus      ║
                    ║  Up/Down, j/k      Move in sidebar, input history    ║
                    ║  PageUp/PageDown   Scroll transcript                 ║
                    ║  Enter             Send / open conversation          ║
                    ║  Esc               Clear input / back                ║
                    ║  Ctrl+C            Quit                              ║
                    ║                                                      ║
                    ║  [Press any key to close]                            ║
                    ║                                                      ║
                    ╚══════════════════════════════════════════════════════╝
                                     │╔════════════════════════════════════════════════╗
        -----------------------------│║ > █Message your AI assistant...             >> ║
         @ My Account                │╚════════════════════════════════════════════════╝
         * Settings                  │Personal AI Assistant can make mistakes. Consider…
         < Log out                   │ Input  [Ctrl+D] delete │ [Tab] focus │ [F1] help
        ");
        });
    }
}
