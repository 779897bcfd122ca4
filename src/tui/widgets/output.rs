//! Result pane under the active screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::app::state::{OutputLevel, OutputLog};
use crate::tui::theme::styles;

/// Shows the newest lines of the output log that fit
pub struct OutputPane<'a> {
    log: &'a OutputLog,
}

impl<'a> OutputPane<'a> {
    pub fn new(log: &'a OutputLog) -> Self {
        Self { log }
    }
}

impl Widget for OutputPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Output ");
        let visible = block.inner(area).height as usize;

        let lines: Vec<Line> = self
            .log
            .lines()
            .skip(self.log.len().saturating_sub(visible))
            .map(|line| {
                let style = match line.level {
                    OutputLevel::Info => styles::text_primary(),
                    OutputLevel::Error => styles::status_red(),
                };
                Line::styled(line.text.as_str(), style)
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
