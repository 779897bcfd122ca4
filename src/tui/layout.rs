//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Output pane height, borders included
pub const OUTPUT_HEIGHT: u16 = 6;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub output: Rect,
    pub zones: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, output, zones] = Layout::vertical([
        Constraint::Length(3),             // Header
        Constraint::Min(5),                // Active screen
        Constraint::Length(OUTPUT_HEIGHT), // Output pane
        Constraint::Length(1),             // Back / Quit
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        output,
        zones,
    }
}
