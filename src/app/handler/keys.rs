//! Key event handlers for the different input contexts

use crate::app::message::Message;
use crate::app::navigation::{Focus, HotZone, Screen};
use crate::app::overlay::Overlay;
use crate::app::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convert key events to messages based on what currently has input
pub fn handle_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    // Force quit from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    if state.is_busy() {
        return handle_key_loading(key);
    }

    if let Focus::Zone(_) = state.focus {
        return handle_key_hot_zone(key);
    }

    match &state.overlay {
        Some(Overlay::Prompt(_)) => handle_key_text(key),
        Some(Overlay::Picker(_)) => handle_key_list(key),
        Some(Overlay::Notice(_)) => handle_key_notice(key),
        None if state.screen == Screen::Login => handle_key_login(key),
        None => handle_key_list(key),
    }
}

/// Handle key events while a call is outstanding
fn handle_key_loading(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while Back or Quit is focused
fn handle_key_hot_zone(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Left => Some(Message::FocusZone(HotZone::Back)),
        KeyCode::Right => Some(Message::FocusZone(HotZone::Quit)),
        KeyCode::Up | KeyCode::Tab => Some(Message::FocusScreen),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Activate),
        KeyCode::Esc => Some(Message::FocusScreen),
        _ => None,
    }
}

/// Handle key events on list screens and the file picker
fn handle_key_list(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Message::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::Down),
        KeyCode::Enter => Some(Message::Activate),
        KeyCode::Esc | KeyCode::Backspace => Some(Message::Back),
        KeyCode::Left => Some(Message::FocusZone(HotZone::Back)),
        KeyCode::Right => Some(Message::FocusZone(HotZone::Quit)),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the login form
fn handle_key_login(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Message::NextField),
        KeyCode::Left => Some(Message::FocusZone(HotZone::Back)),
        KeyCode::Right => Some(Message::FocusZone(HotZone::Quit)),
        _ => handle_key_text(key),
    }
}

/// Handle key events in a text field
fn handle_key_text(key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => Some(Message::Activate),
        (KeyCode::Esc, _) => Some(Message::Back),
        (KeyCode::Backspace, _) => Some(Message::Backspace),
        // AltGr arrives as Ctrl+Alt on some platforms
        (KeyCode::Char(c), mods)
            if !mods.contains(KeyModifiers::CONTROL) || mods.contains(KeyModifiers::ALT) =>
        {
            Some(Message::Input(c))
        }
        _ => None,
    }
}

/// Handle key events while a notice is shown
fn handle_key_notice(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Message::Back),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
