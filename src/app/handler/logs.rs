//! Logs screen

use chrono::Local;

use crate::app::message::RemoteCall;
use crate::app::navigation::LogsItem;
use crate::app::state::AppState;
use crate::common::prelude::*;
use crate::core::timestamped_name;
use crate::device::{CommandOutput, RemoteAction, RemoteResult};

use super::{report_error, start_call, UpdateResult};

pub fn handle_item(state: &mut AppState, item: LogsItem) -> UpdateResult {
    match item {
        LogsItem::GetLogs => {
            let dest = state
                .settings
                .paths
                .logs()
                .join(timestamped_name("Vslog", ".rar", &Local::now()));
            debug!("Downloading logs to {}", dest.display());
            start_call(state, RemoteCall::GetLogs, "Fetching logs Please wait...", |token| {
                RemoteAction::download_logs(token, &dest)
            })
            .unwrap_or_else(|e| report_error(state, "Failed to fetch logs", e))
        }
    }
}

pub fn handle_done(state: &mut AppState, result: RemoteResult<CommandOutput>) -> UpdateResult {
    state.finish_loading();
    match result {
        Ok(output) => state.output_info(format!("Logs recorded: {}", output.summary())),
        Err(e) => {
            warn!("Log download failed: {}", e);
            state.output_error("Failed to fetch logs.");
        }
    }
    UpdateResult::none()
}
