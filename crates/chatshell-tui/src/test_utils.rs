//! Test utilities for rendering the TUI into strings.

use crate::app::App;
use crate::layout::{render_app, screen_text};
use chatshell_engine::{Config, IconPreference};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Screen width most render tests use.
pub const TEST_WIDTH: u16 = 80;
/// Screen height most render tests use.
pub const TEST_HEIGHT: u16 = 24;

/// Terminal over a `TestBackend` of the given size.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app with the sample conversations.
pub fn create_test_app() -> App {
    App::new_for_test()
}

/// Create a test app drawing with the given icon set.
pub fn create_test_app_with_icons(icons: IconPreference) -> App {
    let mut config = Config::default();
    config.ui.icons = icons;
    App::new(&config)
}

/// Convert a buffer to text for assertions.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    screen_text(buffer)
}

/// Render the app at the default size and return the screen text.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the app at a custom size and return the screen text.
pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }

    #[test]
    fn test_terminal_draw_matches_direct_render() {
        let app = create_test_app();
        let mut terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_app(&app, area, frame.buffer_mut());
            })
            .unwrap();
        let drawn = buffer_to_string(terminal.backend().buffer());
        assert_eq!(drawn, render_app_to_string(&app));
    }
}
