//! Firmware screen: version check, update flow, reboot, patch scripts

use std::path::PathBuf;

use crate::app::flows::{FirmwareStage, FirmwareUpdate, Flow};
use crate::app::message::{Message, RemoteCall};
use crate::app::navigation::FirmwareItem;
use crate::app::overlay::PickPurpose;
use crate::app::state::AppState;
use crate::common::prelude::*;
use crate::device::{CommandOutput, RemoteAction, RemoteResult};

use super::{open_picker, report_error, start_call, UpdateAction, UpdateResult};

pub fn handle_item(state: &mut AppState, item: FirmwareItem) -> UpdateResult {
    match item {
        FirmwareItem::CheckVersion => {
            // The version endpoint needs no token
            let ip = match state.session.ip() {
                Ok(ip) => ip.to_string(),
                Err(e) => return report_error(state, "Failed to check firmware", e),
            };
            state.begin_loading("Please wait...");
            UpdateResult::action(UpdateAction::Remote {
                call: RemoteCall::FirmwareVersion,
                ip,
                action: RemoteAction::firmware_version(),
            })
        }
        FirmwareItem::Update => open_picker(state, PickPurpose::FirmwareImage),
        FirmwareItem::Reboot => {
            start_call(state, RemoteCall::Reboot, "Please wait...", RemoteAction::reboot)
                .unwrap_or_else(|e| report_error(state, "Failed to reboot system", e))
        }
        FirmwareItem::Script => open_picker(state, PickPurpose::PatchScript),
    }
}

/// A file was picked from the Firmware screen
pub fn handle_pick(state: &mut AppState, purpose: PickPurpose, path: PathBuf) -> UpdateResult {
    match purpose {
        PickPurpose::FirmwareImage => {
            let result = start_call(
                state,
                RemoteCall::FirmwareUpload,
                FirmwareStage::Uploading.status_text(),
                |token| RemoteAction::upload_firmware(token, &path),
            );
            match result {
                Ok(update) => {
                    state.flow = Some(Flow::FirmwareUpdate(FirmwareUpdate::new(path)));
                    update
                }
                Err(e) => report_error(state, "Failed to update firmware", e),
            }
        }
        PickPurpose::PatchScript => start_call(state, RemoteCall::Script, "Please wait...", |t| {
            RemoteAction::upload_script(t, &path)
        })
        .unwrap_or_else(|e| report_error(state, "Failed to apply patch", e)),
        PickPurpose::UploadConfiguration | PickPurpose::EditConfiguration => UpdateResult::none(),
    }
}

pub fn handle_done(
    state: &mut AppState,
    call: RemoteCall,
    result: RemoteResult<CommandOutput>,
) -> UpdateResult {
    match call {
        RemoteCall::FirmwareUpload | RemoteCall::FirmwareReboot => {
            return advance_update(state, call, result)
        }
        _ => {}
    }

    state.finish_loading();
    match (call, result) {
        (RemoteCall::FirmwareVersion, Ok(output)) => {
            state.output_info(format!("Firmware response: {}", output.text()));
        }
        (RemoteCall::FirmwareVersion, Err(e)) => {
            warn!("Firmware version check failed: {}", e);
            state.output_error("Failed to check firmware.");
        }
        (RemoteCall::Reboot, Ok(_)) => state.output_info("Reboot initiated"),
        (RemoteCall::Reboot, Err(e)) => {
            warn!("Reboot failed: {}", e);
            state.output_error("Failed to reboot system.");
        }
        (RemoteCall::Script, Ok(output)) => {
            state.output_info(format!("Patch response: {}", output.text()));
        }
        (RemoteCall::Script, Err(e)) => {
            warn!("Patch upload failed: {}", e);
            state.output_error("Failed to apply patch.");
        }
        (call, _) => debug!("Unexpected firmware completion {:?}", call),
    }
    UpdateResult::none()
}

/// Upload and reboot completions of the update flow
fn advance_update(
    state: &mut AppState,
    call: RemoteCall,
    result: RemoteResult<CommandOutput>,
) -> UpdateResult {
    let Some(Flow::FirmwareUpdate(flow)) = state.flow.as_mut() else {
        warn!("{:?} completed with no firmware update in progress", call);
        return UpdateResult::none();
    };

    let ok = result.is_ok();
    let expected = match flow.stage {
        FirmwareStage::Uploading => RemoteCall::FirmwareUpload,
        FirmwareStage::Rebooting => RemoteCall::FirmwareReboot,
        stage => {
            warn!("{:?} completed in stage {:?}", call, stage);
            return UpdateResult::none();
        }
    };
    if call != expected {
        warn!("Out of order completion {:?}, expected {:?}", call, expected);
        return UpdateResult::none();
    }

    let stage = flow.step_completed(ok);
    match (stage, result) {
        (FirmwareStage::Rebooting, Ok(output)) => {
            state.output_info(format!("Update response: {}", output.text()));
            start_call(state, RemoteCall::FirmwareReboot, stage.status_text(), RemoteAction::reboot)
                .unwrap_or_else(|e| report_error(state, "Failed to reboot system", e))
        }
        (FirmwareStage::Waiting, _) => {
            info!("Reboot initiated after firmware upload");
            state.output_info("System reboot initiated");
            state.set_loading_text(stage.status_text());
            UpdateResult::action(UpdateAction::schedule(
                state.settings.timing.firmware_reboot_wait(),
                Message::FirmwareWaitElapsed,
            ))
        }
        (_, Err(e)) => {
            warn!("Firmware update failed at {:?}: {}", call, e);
            state.flow = None;
            state.finish_loading();
            state.output_error("Failed to update firmware.");
            UpdateResult::none()
        }
        (stage, Ok(_)) => {
            debug!("Firmware update in stage {:?}", stage);
            UpdateResult::none()
        }
    }
}

/// The fixed post-reboot wait has passed
pub fn handle_wait_elapsed(state: &mut AppState) -> UpdateResult {
    let Some(Flow::FirmwareUpdate(flow)) = state.flow.as_mut() else {
        return UpdateResult::none();
    };
    if flow.wait_elapsed() != FirmwareStage::Done {
        return UpdateResult::none();
    }

    info!("Firmware updated: {}", flow.image.display());
    state.flow = None;
    // The device rebooted, the token is gone with it
    state.session.clear_token();
    state.set_loading_text(FirmwareStage::Done.status_text());
    state.output_info("Firmware updated");
    // Not a process-ending action: the operator logs back in after the reboot
    UpdateResult::action(UpdateAction::schedule(
        state.settings.timing.notice_dismiss(),
        Message::ShowLogin,
    ))
}
