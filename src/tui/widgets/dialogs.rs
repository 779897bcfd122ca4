//! Modal boxes: loading indicator, text prompt, file picker, notice

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, clear_area, percent_width, render_shadow};
use crate::app::overlay::{FilePicker, Notice, NoticeLevel, Prompt};
use crate::tui::theme::styles;

/// Most rows a file picker shows before scrolling
const PICKER_MAX_ROWS: u16 = 12;

fn modal_area(area: Rect, height: u16, buf: &mut Buffer) -> Rect {
    let rect = centered_rect(percent_width(area, 60, 30), height, area);
    clear_area(buf, rect);
    render_shadow(buf, rect);
    rect
}

// ─────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────

/// Status box shown while a call or flow is outstanding
pub struct LoadingBox<'a> {
    text: &'a str,
}

impl<'a> LoadingBox<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for LoadingBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_area(area, 5, buf);
        Paragraph::new(self.text)
            .style(styles::status_yellow())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(styles::modal_block(" Loading... "))
            .render(rect, buf);
    }
}

// ─────────────────────────────────────────────────────────────────
// Prompt
// ─────────────────────────────────────────────────────────────────

pub struct PromptBox<'a> {
    prompt: &'a Prompt,
}

impl<'a> PromptBox<'a> {
    pub fn new(prompt: &'a Prompt) -> Self {
        Self { prompt }
    }
}

impl Widget for PromptBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_area(area, 3, buf);
        let mut text = self.prompt.display_text();
        text.push('█');
        Paragraph::new(text)
            .style(styles::text_primary())
            .block(styles::modal_block(self.prompt.kind.label()))
            .render(rect, buf);
    }
}

// ─────────────────────────────────────────────────────────────────
// File picker
// ─────────────────────────────────────────────────────────────────

pub struct FilePickerBox<'a> {
    picker: &'a FilePicker,
}

impl<'a> FilePickerBox<'a> {
    pub fn new(picker: &'a FilePicker) -> Self {
        Self { picker }
    }
}

impl Widget for FilePickerBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = (self.picker.files.len() as u16).min(PICKER_MAX_ROWS);
        let rect = modal_area(area, rows + 2, buf);

        let items: Vec<ListItem> = self
            .picker
            .files
            .iter()
            .map(|name| ListItem::new(format!(" {name}")))
            .collect();

        let list = List::new(items)
            .block(styles::modal_block(self.picker.purpose.title()))
            .style(styles::text_primary())
            .highlight_style(styles::focused_selected());

        let mut state = ListState::default().with_selected(Some(self.picker.selected));
        StatefulWidget::render(list, rect, buf, &mut state);
    }
}

// ─────────────────────────────────────────────────────────────────
// Notice
// ─────────────────────────────────────────────────────────────────

pub struct NoticeBox<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeBox<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_area(area, 5, buf);
        let (title, style) = match self.notice.level {
            NoticeLevel::Info => (" Info ", styles::text_primary()),
            NoticeLevel::Error => (" Error ", styles::status_red()),
        };
        Paragraph::new(Line::styled(self.notice.text.as_str(), style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(styles::modal_block(title))
            .render(rect, buf);
    }
}
