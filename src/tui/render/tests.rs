//! Full-screen rendering tests

use super::view;
use crate::app::navigation::{Focus, HotZone, Screen};
use crate::app::overlay::{NoticeLevel, Overlay, Prompt, PromptKind};
use crate::app::state::AppState;
use crate::tui::test_utils::{create_logged_in_state, create_test_state, TestTerminal};

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_device_select_lists_registry() {
    let state = create_test_state();
    let term = render(&state);

    assert!(term.buffer_contains("Select Device"));
    assert!(term.buffer_contains("vSECC_1 >>>"));
    assert!(term.buffer_contains("vSECC_2 >>>"));
    assert!(term.buffer_contains("[ Back ]"));
    assert!(term.buffer_contains("[ Quit ]"));
}

#[test]
fn test_login_screen_shows_selected_device() {
    let mut state = create_test_state();
    let device = state.registry.device_at(1).unwrap();
    state.session.set_device(device);
    state.show(Screen::Login);

    let term = render(&state);
    assert!(term.buffer_contains("Username"));
    assert!(term.buffer_contains("192.168.3.12"));
}

#[test]
fn test_menu_lists_sections() {
    let state = create_logged_in_state();
    let term = render(&state);

    assert!(term.buffer_contains("Firmware"));
    assert!(term.buffer_contains("System_Log"));
    assert!(term.buffer_contains("Config_Setting"));
    assert!(term.buffer_contains("Critical Settings"));
    assert!(term.buffer_contains("logged in"));
}

#[test]
fn test_loading_box_over_origin_screen() {
    let mut state = create_logged_in_state();
    state.show(Screen::Firmware);
    state.begin_loading("Reboot Initiated Please wait...");

    let term = render(&state);
    assert!(term.buffer_contains("Reboot Initiated Please wait..."));
    assert!(term.buffer_contains("Firmware"));
}

#[test]
fn test_output_pane_shows_results() {
    let mut state = create_logged_in_state();
    state.output_info("Firmware response: 2.4.1");
    state.output_error("Failed to fetch logs.");

    let term = render(&state);
    assert!(term.buffer_contains("Firmware response: 2.4.1"));
    assert!(term.buffer_contains("Failed to fetch logs."));
}

#[test]
fn test_prompt_overlay() {
    let mut state = create_logged_in_state();
    state.show(Screen::CriticalSettings);
    state.overlay = Some(Overlay::Prompt(Prompt::new(PromptKind::NewIp)));

    let term = render(&state);
    assert!(term.buffer_contains("Enter New IP"));
}

#[test]
fn test_notice_overlay() {
    let mut state = create_logged_in_state();
    state.show(Screen::Firmware);
    state.notify(NoticeLevel::Error, "No firmware files found");

    let term = render(&state);
    assert!(term.buffer_contains("No firmware files found"));
}

#[test]
fn test_hot_zone_focus_renders() {
    let mut state = create_test_state();
    state.focus = Focus::Zone(HotZone::Back);

    let term = render(&state);
    assert!(term.line_contains(23, "[ Back ]"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = create_logged_in_state();
    state.begin_loading("Please wait...");
    state.notify(NoticeLevel::Info, "hello");

    let mut term = TestTerminal::with_size(20, 8);
    term.draw_with(|frame| view(frame, &state));
}
