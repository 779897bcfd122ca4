//! Test utilities for TUI rendering verification
//!
//! Helpers for testing widgets and full-screen rendering with ratatui's
//! TestBackend.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(LoadingBox::new("Please wait..."), term.area());
//! assert!(term.buffer_contains("Please wait..."));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use crate::app::navigation::Screen;
use crate::app::state::AppState;
use crate::config::Settings;
use crate::core::DeviceIndex;
use crate::device::DeviceRegistry;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// TestBackend terminal with buffer assertions
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text appears anywhere on screen (rows are not joined)
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Whole screen, one line per row
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y) + "\n")
            .collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    if line >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, line)].symbol())
        .collect()
}

/// AppState with two registered devices, on the device list
pub fn create_test_state() -> AppState {
    let registry = DeviceRegistry::from_entries(
        "/tmp/chIP.json",
        [
            (DeviceIndex(1), "192.168.3.11".to_string()),
            (DeviceIndex(2), "192.168.3.12".to_string()),
        ],
    )
    .expect("Failed to build test registry");
    AppState::new(Settings::default(), registry)
}

/// AppState logged in to the first device, on the menu
pub fn create_logged_in_state() -> AppState {
    let mut state = create_test_state();
    let device = state.registry.device_at(0).expect("registry has a device");
    state.session.set_device(device);
    state.session.set_token("token");
    state.show(Screen::Menu);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_custom_size() {
        let term = TestTerminal::with_size(100, 50);
        assert_eq!(term.area(), Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.line_contains(0, "Hello"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
        assert!(!term.line_contains(9, "Hello"));
    }

    #[test]
    fn test_cell_at() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("AB"), term.area());

        assert_eq!(term.cell_at(0, 0), Some("A"));
        assert_eq!(term.cell_at(2, 0), Some(" "));
        assert_eq!(term.cell_at(100, 100), None);
    }

    #[test]
    fn test_content_has_one_line_per_row() {
        let term = TestTerminal::with_size(5, 2);
        assert_eq!(term.content().lines().count(), 2);
    }

    #[test]
    fn test_create_logged_in_state() {
        let state = create_logged_in_state();
        assert_eq!(state.screen, Screen::Menu);
        assert!(state.session.is_authenticated());
        assert_eq!(state.registry.len(), 2);
    }
}
