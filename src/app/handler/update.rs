//! Main update function - handles state transitions (TEA pattern)

use crate::app::message::{Message, RemoteCall};
use crate::app::navigation::{
    BackTarget, ConfigItem, CriticalItem, FirmwareItem, Focus, HotZone, LogsItem, MenuItem,
    Screen,
};
use crate::app::overlay::Overlay;
use crate::app::state::{AppState, LoginField};
use crate::common::prelude::*;
use crate::core::ExitReason;

use super::{config, critical, firmware, keys::handle_key, login, logs, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.exit(ExitReason::UserQuit);
            UpdateResult::none()
        }

        Message::Exit(reason) => {
            info!("Exiting: {:?}", reason);
            state.exit(reason);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Completions and timers
        // ─────────────────────────────────────────────────────────
        Message::RemoteDone { call, result } => match call {
            RemoteCall::Login => login::handle_login_done(state, result),
            RemoteCall::AuthProbe => login::handle_probe_done(state, result),
            RemoteCall::FirmwareVersion
            | RemoteCall::FirmwareUpload
            | RemoteCall::FirmwareReboot
            | RemoteCall::Reboot
            | RemoteCall::Script => firmware::handle_done(state, call, result),
            RemoteCall::GetLogs => logs::handle_done(state, result),
            RemoteCall::GetConfiguration | RemoteCall::SetConfiguration => {
                config::handle_done(state, call, result)
            }
            RemoteCall::SetNetwork | RemoteCall::NetworkReboot | RemoteCall::SetCredentials => {
                critical::handle_done(state, call, result)
            }
        },

        Message::ShowLogin => {
            state.finish_loading_to(Screen::Login);
            state.login.field = LoginField::Username;
            UpdateResult::none()
        }

        Message::FirmwareWaitElapsed => firmware::handle_wait_elapsed(state),

        Message::IpPersisted { result } => critical::handle_ip_persisted(state, result),

        Message::DismissNotice(id) => {
            if matches!(&state.overlay, Some(Overlay::Notice(n)) if n.id == id) {
                state.overlay = None;
            }
            UpdateResult::none()
        }

        Message::EditorClosed { result } => config::handle_editor_closed(state, result),

        // ─────────────────────────────────────────────────────────
        // Navigation and input (gated while a call is outstanding)
        // ─────────────────────────────────────────────────────────
        msg if state.is_busy() => {
            trace!("Ignoring {:?} while busy", msg);
            UpdateResult::none()
        }

        Message::FocusZone(zone) => {
            state.focus = Focus::Zone(zone);
            UpdateResult::none()
        }

        Message::FocusScreen => {
            state.focus = Focus::Screen;
            UpdateResult::none()
        }

        Message::Back => handle_back(state),

        Message::Activate => match state.focus {
            Focus::Zone(HotZone::Back) => {
                state.focus = Focus::Screen;
                handle_back(state)
            }
            Focus::Zone(HotZone::Quit) => UpdateResult::message(Message::Quit),
            Focus::Screen => handle_activate(state),
        },

        Message::Up => {
            match state.overlay.as_mut() {
                Some(Overlay::Picker(picker)) => picker.up(),
                Some(_) => {}
                None => state.selected = state.selected.saturating_sub(1),
            }
            UpdateResult::none()
        }

        Message::Down => {
            match state.overlay.as_mut() {
                Some(Overlay::Picker(picker)) => picker.down(),
                Some(_) => {}
                None => {
                    if state.selected + 1 < state.row_count() {
                        state.selected += 1;
                    }
                }
            }
            UpdateResult::none()
        }

        Message::Input(c) => {
            match state.overlay.as_mut() {
                Some(Overlay::Prompt(prompt)) => prompt.input.push(c),
                Some(_) => {}
                None if state.screen == Screen::Login => state.login.active_mut().push(c),
                None => {}
            }
            UpdateResult::none()
        }

        Message::Backspace => {
            match state.overlay.as_mut() {
                Some(Overlay::Prompt(prompt)) => {
                    prompt.input.pop();
                }
                Some(_) => {}
                None if state.screen == Screen::Login => {
                    state.login.active_mut().pop();
                }
                None => {}
            }
            UpdateResult::none()
        }

        Message::NextField => {
            if state.screen == Screen::Login {
                state.login.field = match state.login.field {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            UpdateResult::none()
        }
    }
}

/// Close the top overlay, or navigate back one screen
fn handle_back(state: &mut AppState) -> UpdateResult {
    if state.overlay.take().is_some() {
        return UpdateResult::none();
    }

    match state.screen.back() {
        BackTarget::To(Screen::DeviceSelect) => {
            state.session.clear_token();
            state.login.reset();
            state.show(Screen::DeviceSelect);
        }
        BackTarget::To(Screen::Login) => {
            state.session.clear_token();
            state.login.reset();
            state.show(Screen::Login);
        }
        BackTarget::To(screen) => state.show(screen),
        BackTarget::Exit => {
            info!("Back from device selection, exiting");
            state.exit(ExitReason::UserQuit);
        }
        BackTarget::Blocked => {}
    }
    UpdateResult::none()
}

/// Enter on the active screen or overlay
fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.overlay.take() {
        Some(Overlay::Picker(picker)) => {
            let Some(path) = picker.selected_path() else {
                return UpdateResult::none();
            };
            info!("Selected file: {}", path.display());
            return match state.screen {
                Screen::Firmware => firmware::handle_pick(state, picker.purpose, path),
                Screen::Config => config::handle_pick(state, picker.purpose, path),
                _ => UpdateResult::none(),
            };
        }
        Some(Overlay::Prompt(prompt)) => return critical::handle_submit(state, prompt),
        Some(Overlay::Notice(_)) => return UpdateResult::none(),
        None => {}
    }

    let row = state.selected;
    match state.screen {
        Screen::DeviceSelect => {
            let Some(device) = state.registry.device_at(row) else {
                return UpdateResult::none();
            };
            info!("Selected device {} ({})", device.index, device.ip);
            state.session.set_device(device);
            state.login.reset();
            state.show(Screen::Login);
            UpdateResult::none()
        }
        Screen::Login => login::handle_submit(state),
        Screen::Loading => UpdateResult::none(),
        Screen::Menu => {
            if let Some(item) = MenuItem::ALL.get(row) {
                state.show(item.screen());
            }
            UpdateResult::none()
        }
        Screen::Firmware => match FirmwareItem::ALL.get(row) {
            Some(item) => firmware::handle_item(state, *item),
            None => UpdateResult::none(),
        },
        Screen::Logs => match LogsItem::ALL.get(row) {
            Some(item) => logs::handle_item(state, *item),
            None => UpdateResult::none(),
        },
        Screen::Config => match ConfigItem::ALL.get(row) {
            Some(item) => config::handle_item(state, *item),
            None => UpdateResult::none(),
        },
        Screen::CriticalSettings => match CriticalItem::ALL.get(row) {
            Some(item) => critical::handle_item(state, *item),
            None => UpdateResult::none(),
        },
    }
}
