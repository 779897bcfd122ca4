//! Shared modal overlay utilities.
//!
//! Centering, clearing and shadows for the boxes stacked above the
//! active screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::tui::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Width as a percentage of the area, at least `min` columns
pub fn percent_width(area: Rect, percent: u16, min: u16) -> u16 {
    let width = (u32::from(area.width) * u32::from(percent) / 100) as u16;
    width.max(min).min(area.width)
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let bounds = buf.area;

    // Right edge
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if bounds.contains((right_x, y).into()) {
            buf[(right_x, y)].set_char(' ').set_style(shadow_style);
        }
    }

    // Bottom edge
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if bounds.contains((x, bottom_y).into()) {
            buf[(x, bottom_y)].set_char(' ').set_style(shadow_style);
        }
    }
}

/// Clear a rect and prepare it for modal content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
