//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function, navigation, and message dispatch
//! - `keys`: Key event to message mapping
//! - `login`: Login submission and the auth probe
//! - `firmware`, `logs`, `config`, `critical`: per-screen actions and their
//!   completions

pub mod config;
pub mod critical;
pub mod firmware;
pub mod keys;
pub mod login;
pub mod logs;
pub mod update;


use std::path::PathBuf;
use std::time::Duration;

use crate::app::message::{Message, RemoteCall};
use crate::app::overlay::{FilePicker, NoticeLevel, Overlay, PickPurpose};
use crate::app::state::AppState;
use crate::common::prelude::*;
use crate::core::{list_artifacts, DeviceIndex};
use crate::device::RemoteAction;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Run one remote call against the device at `ip`; completion comes back
    /// as `Message::RemoteDone`
    Remote {
        call: RemoteCall,
        ip: String,
        action: RemoteAction,
    },

    /// Deliver `message` after `delay`
    Schedule {
        delay: Duration,
        message: Box<Message>,
    },

    /// Write a new device address into the registry (main loop only);
    /// completion comes back as `Message::IpPersisted`
    PersistIp { index: DeviceIndex, ip: String },

    /// Suspend the terminal and open `path` in the user's editor
    OpenEditor { path: PathBuf },
}

impl UpdateAction {
    pub fn schedule(delay: Duration, message: Message) -> Self {
        Self::Schedule {
            delay,
            message: Box::new(message),
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Shared helpers for the screen handlers
// ─────────────────────────────────────────────────────────────────

/// Issue an authenticated call from the current screen behind the loading box
fn start_call(
    state: &mut AppState,
    call: RemoteCall,
    loading_text: &str,
    build: impl FnOnce(&str) -> RemoteAction,
) -> Result<UpdateResult> {
    let ip = state.session.ip()?.to_string();
    let action = build(state.session.token()?);
    state.begin_loading(loading_text);
    Ok(UpdateResult::action(UpdateAction::Remote { call, ip, action }))
}

/// Open a file picker, or show why there is nothing to pick
fn open_picker(state: &mut AppState, purpose: PickPurpose) -> UpdateResult {
    let kind = purpose.kind();
    let dir = kind.dir(&state.settings.paths);
    let filter = kind.filter(&state.settings.artifacts);

    match list_artifacts(&dir, &filter) {
        Ok(files) => {
            state.overlay = Some(Overlay::Picker(FilePicker::new(purpose, dir, files)));
            UpdateResult::none()
        }
        Err(Error::NoArtifacts { .. }) => notice(state, NoticeLevel::Info, kind.empty_message()),
        Err(e) => {
            warn!("Failed to read directory {}: {}", dir.display(), e);
            notice(
                state,
                NoticeLevel::Error,
                format!("Failed to read directory: {}", dir.display()),
            )
        }
    }
}

/// Show a notice and schedule its dismissal
fn notice(state: &mut AppState, level: NoticeLevel, text: impl Into<String>) -> UpdateResult {
    let id = state.notify(level, text);
    UpdateResult::action(UpdateAction::schedule(
        state.settings.timing.notice_dismiss(),
        Message::DismissNotice(id),
    ))
}

/// Report a handler error that should not normally happen (e.g. a session
/// value missing) without leaving the user stuck on the loading box
fn report_error(state: &mut AppState, context: &str, err: Error) -> UpdateResult {
    if err.is_recoverable() {
        warn!("{}: {}", context, err);
    } else {
        error!("{}: {}", context, err);
    }
    state.flow = None;
    state.finish_loading();
    state.output_error(format!("{}: {}", context, err));
    UpdateResult::none()
}
