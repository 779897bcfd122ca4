//! Main render/view function (View in TEA pattern)

use super::{layout, widgets};
use crate::app::navigation::{Focus, Screen};
use crate::app::overlay::Overlay;
use crate::app::state::AppState;
use ratatui::layout::Rect;
use ratatui::Frame;

#[cfg(test)]
mod tests;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: state is only read.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area);

    let header = widgets::MainHeader::new(
        state.session.device().ok(),
        &state.settings.device.label_prefix,
        state.session.is_authenticated(),
    );
    frame.render_widget(header, areas.header);

    // The loading box floats over the screen it was entered from
    let (screen, selected) = match &state.loading {
        Some(loading) if state.screen == Screen::Loading => {
            (loading.origin, loading.origin_selected)
        }
        _ => (state.screen, state.selected),
    };
    render_screen(frame, state, screen, selected, areas.body);

    frame.render_widget(widgets::OutputPane::new(&state.output), areas.output);
    frame.render_widget(widgets::HotZones::new(state.focus), areas.zones);

    if let Some(loading) = &state.loading {
        frame.render_widget(widgets::LoadingBox::new(&loading.text), areas.body);
    }

    match &state.overlay {
        Some(Overlay::Picker(picker)) => {
            frame.render_widget(widgets::FilePickerBox::new(picker), areas.body);
        }
        Some(Overlay::Prompt(prompt)) => {
            frame.render_widget(widgets::PromptBox::new(prompt), areas.body);
        }
        Some(Overlay::Notice(notice)) => {
            frame.render_widget(widgets::NoticeBox::new(notice), areas.body);
        }
        None => {}
    }
}

fn render_screen(frame: &mut Frame, state: &AppState, screen: Screen, selected: usize, area: Rect) {
    let focused = state.focus == Focus::Screen && state.overlay.is_none();

    match screen {
        Screen::DeviceSelect => {
            let prefix = &state.settings.device.label_prefix;
            let items = state.devices().iter().map(|d| d.label(prefix)).collect();
            let list = widgets::MenuList::new(screen.title(), items, selected).focused(focused);
            frame.render_widget(list, area);
        }
        Screen::Login => {
            frame.render_widget(widgets::LoginPanel::new(&state.login, focused), area);
        }
        // Only reachable with no origin recorded; the box itself is drawn on top
        Screen::Loading => {}
        screen => {
            let items = screen
                .item_labels()
                .into_iter()
                .map(String::from)
                .collect();
            let list = widgets::MenuList::new(screen.title(), items, selected).focused(focused);
            frame.render_widget(list, area);
        }
    }
}
