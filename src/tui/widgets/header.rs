//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::Device;
use crate::tui::theme::styles;

/// App title plus the selected device and session status
pub struct MainHeader<'a> {
    device: Option<&'a Device>,
    label_prefix: &'a str,
    authenticated: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(device: Option<&'a Device>, label_prefix: &'a str, authenticated: bool) -> Self {
        Self {
            device,
            label_prefix,
            authenticated,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" Charger Console", styles::accent_bold())];

        if let Some(device) = self.device {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("{}_{}", self.label_prefix, device.index),
                styles::text_primary(),
            ));
            spans.push(Span::styled(format!(" ({})", device.ip), styles::text_muted()));
            if self.authenticated {
                spans.push(Span::styled("  ● logged in", styles::status_green()));
            }
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
