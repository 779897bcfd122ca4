//! Back / Quit bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::navigation::{Focus, HotZone};
use crate::tui::theme::styles;

pub struct HotZones {
    focus: Focus,
}

impl HotZones {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    fn zone(&self, zone: HotZone, label: &'static str) -> Span<'static> {
        if self.focus == Focus::Zone(zone) {
            Span::styled(label, styles::focused_selected())
        } else {
            Span::styled(label, styles::text_muted())
        }
    }
}

impl Widget for HotZones {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw(" "),
            self.zone(HotZone::Back, "[ Back ]"),
            Span::raw("  "),
            self.zone(HotZone::Quit, "[ Quit ]"),
            Span::styled("   ←/→ select  ↑ return  Esc back", styles::text_muted()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    #[test]
    fn test_focused_zone_is_highlighted() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(HotZones::new(Focus::Zone(HotZone::Quit)), term.area());

        assert!(term.buffer_contains("[ Back ]"));
        assert!(term.buffer_contains("[ Quit ]"));
        // "[ Quit ]" starts after " [ Back ]  "
        let quit = &term.buffer()[(11, 0)];
        assert!(quit.modifier.contains(Modifier::BOLD));
        let back = &term.buffer()[(1, 0)];
        assert!(!back.modifier.contains(Modifier::BOLD));
    }
}
