//! Config screen: download, upload and local editing of configuration files

use std::path::PathBuf;

use chrono::Local;

use crate::app::message::RemoteCall;
use crate::app::navigation::ConfigItem;
use crate::app::overlay::{NoticeLevel, PickPurpose};
use crate::app::state::AppState;
use crate::common::prelude::*;
use crate::core::timestamped_name;
use crate::device::{CommandOutput, RemoteAction, RemoteResult};

use super::{notice, open_picker, report_error, start_call, UpdateAction, UpdateResult};

pub fn handle_item(state: &mut AppState, item: ConfigItem) -> UpdateResult {
    match item {
        ConfigItem::GetConfiguration => {
            let dest = state
                .settings
                .paths
                .configs()
                .join(timestamped_name("config", "", &Local::now()));
            debug!("Downloading configuration to {}", dest.display());
            start_call(
                state,
                RemoteCall::GetConfiguration,
                "Fetching configuration Please wait...",
                |token| RemoteAction::download_configuration(token, &dest),
            )
            .unwrap_or_else(|e| report_error(state, "Failed to fetch configuration", e))
        }
        ConfigItem::SetConfiguration => open_picker(state, PickPurpose::UploadConfiguration),
        ConfigItem::EditFile => open_picker(state, PickPurpose::EditConfiguration),
    }
}

/// A file was picked from the Config screen
pub fn handle_pick(state: &mut AppState, purpose: PickPurpose, path: PathBuf) -> UpdateResult {
    match purpose {
        PickPurpose::UploadConfiguration => start_call(
            state,
            RemoteCall::SetConfiguration,
            "Applying configuration Please wait...",
            |token| RemoteAction::upload_configuration(token, &path),
        )
        .unwrap_or_else(|e| report_error(state, "Failed to set configuration", e)),
        PickPurpose::EditConfiguration => {
            UpdateResult::action(UpdateAction::OpenEditor { path })
        }
        PickPurpose::FirmwareImage | PickPurpose::PatchScript => UpdateResult::none(),
    }
}

pub fn handle_done(
    state: &mut AppState,
    call: RemoteCall,
    result: RemoteResult<CommandOutput>,
) -> UpdateResult {
    state.finish_loading();
    match (call, result) {
        (RemoteCall::GetConfiguration, Ok(output)) => {
            state.output_info(format!("Configuration recorded: {}", output.summary()));
        }
        (RemoteCall::GetConfiguration, Err(e)) => {
            warn!("Configuration download failed: {}", e);
            state.output_error("Failed to fetch configuration.");
        }
        (RemoteCall::SetConfiguration, Ok(output)) => {
            state.output_info(format!("Set configuration response: {}", output.text()));
        }
        (RemoteCall::SetConfiguration, Err(e)) => {
            warn!("Configuration upload failed: {}", e);
            state.output_error("Failed to set configuration.");
        }
        (call, _) => debug!("Unexpected config completion {:?}", call),
    }
    UpdateResult::none()
}

/// The external editor returned control to the console
pub fn handle_editor_closed(
    state: &mut AppState,
    result: std::result::Result<(), String>,
) -> UpdateResult {
    match result {
        Ok(()) => {
            state.output_info("Editor closed");
            UpdateResult::none()
        }
        Err(e) => {
            warn!("Editor failed: {}", e);
            state.output_error(format!("Failed to open editor: {}", e));
            notice(state, NoticeLevel::Error, "Failed to open editor.")
        }
    }
}
