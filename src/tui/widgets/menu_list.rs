//! Bordered selection list used by the device list and the action screens

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::tui::theme::styles;

pub struct MenuList<'a> {
    title: &'a str,
    items: Vec<String>,
    selected: usize,
    focused: bool,
}

impl<'a> MenuList<'a> {
    pub fn new(title: &'a str, items: Vec<String>, selected: usize) -> Self {
        Self {
            title,
            items,
            selected,
            focused: true,
        }
    }

    /// Dim the border and selection while a hot-zone has focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Line::styled(
            self.title.to_string(),
            styles::accent_bold(),
        ));

        let items: Vec<ListItem> = self
            .items
            .into_iter()
            .map(|label| ListItem::new(format!(" {label}")))
            .collect();

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };

        let list = List::new(items)
            .block(block)
            .style(styles::text_primary())
            .highlight_style(highlight)
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
