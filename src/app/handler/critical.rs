//! Critical Settings: IP and password changes
//!
//! Both actions are gated by a VIP password and end the session: a rejected
//! input exits after `critical_exit`, an applied change exits once it has
//! been reported.

use crate::app::flows::{
    check_confirmation, check_new_ip, check_vip, ChangeIp, ChangeIpStage, CriticalAbort, Flow,
};
use crate::app::message::{Message, RemoteCall};
use crate::app::navigation::CriticalItem;
use crate::app::overlay::{Overlay, Prompt, PromptKind};
use crate::app::state::AppState;
use crate::common::prelude::*;
use crate::core::ExitReason;
use crate::device::{CommandOutput, RemoteAction, RemoteResult};

use super::{report_error, start_call, UpdateAction, UpdateResult};

pub fn handle_item(state: &mut AppState, item: CriticalItem) -> UpdateResult {
    let kind = match item {
        CriticalItem::ChangeIp => PromptKind::IpVip,
        CriticalItem::ChangePassword => PromptKind::PasswordVip,
    };
    state.overlay = Some(Overlay::Prompt(Prompt::new(kind)));
    UpdateResult::none()
}

/// Enter in one of the critical prompts
pub fn handle_submit(state: &mut AppState, prompt: Prompt) -> UpdateResult {
    let security = &state.settings.security;
    match prompt.kind {
        PromptKind::IpVip => match check_vip(&prompt.input, &security.change_ip_vip) {
            Ok(()) => next_prompt(state, Prompt::new(PromptKind::NewIp)),
            Err(reason) => abort(state, reason),
        },
        PromptKind::NewIp => {
            let ip = prompt.input.trim().to_string();
            match check_new_ip(&ip) {
                Ok(()) => start_change_ip(state, ip),
                Err(reason) => abort(state, reason),
            }
        }
        PromptKind::PasswordVip => {
            match check_vip(&prompt.input, &security.change_password_vip) {
                Ok(()) => next_prompt(state, Prompt::new(PromptKind::NewPassword)),
                Err(reason) => abort(state, reason),
            }
        }
        PromptKind::NewPassword => next_prompt(state, Prompt::confirm_password(prompt.input)),
        PromptKind::ConfirmPassword => {
            let new_password = prompt.new_password.unwrap_or_default();
            match check_confirmation(&new_password, &prompt.input) {
                Ok(()) => start_change_password(state, new_password),
                Err(reason) => abort(state, reason),
            }
        }
    }
}

fn next_prompt(state: &mut AppState, prompt: Prompt) -> UpdateResult {
    state.overlay = Some(Overlay::Prompt(prompt));
    UpdateResult::none()
}

/// Show the rejection and end the session
fn abort(state: &mut AppState, reason: CriticalAbort) -> UpdateResult {
    warn!("Critical input rejected: {}", reason);
    state.overlay = None;
    state.begin_loading(reason.to_string());
    state.output_error(reason.to_string());
    UpdateResult::action(UpdateAction::schedule(
        state.settings.timing.critical_exit(),
        Message::Exit(ExitReason::CriticalInputRejected),
    ))
}

fn start_change_ip(state: &mut AppState, ip: String) -> UpdateResult {
    let index = match state.session.index() {
        Ok(index) => index,
        Err(e) => return report_error(state, "Failed to change IP", e),
    };
    info!("Changing address of device {} to {}", index, ip);

    let network = state.settings.network.clone();
    let result = start_call(
        state,
        RemoteCall::SetNetwork,
        ChangeIpStage::Posting.status_text(),
        |token| RemoteAction::set_network(token, &ip, &network),
    );
    match result {
        Ok(update) => {
            state.flow = Some(Flow::ChangeIp(ChangeIp::new(index, ip)));
            update
        }
        Err(e) => report_error(state, "Failed to change IP", e),
    }
}

fn start_change_password(state: &mut AppState, password: String) -> UpdateResult {
    info!("Changing device credentials");
    start_call(
        state,
        RemoteCall::SetCredentials,
        "Updating credentials Please wait...",
        |token| RemoteAction::set_credentials(token, &password),
    )
    .unwrap_or_else(|e| report_error(state, "Failed to change password", e))
}

pub fn handle_done(
    state: &mut AppState,
    call: RemoteCall,
    result: RemoteResult<CommandOutput>,
) -> UpdateResult {
    match call {
        RemoteCall::SetNetwork | RemoteCall::NetworkReboot => advance_change_ip(state, call, result),
        RemoteCall::SetCredentials => {
            match result {
                Ok(output) => {
                    let text = format!("Credentials update response: {}", output.text());
                    state.set_loading_text(text.clone());
                    state.output_info(text);
                }
                Err(e) => {
                    warn!("Credentials update failed: {}", e);
                    state.set_loading_text("Failed to change password.");
                    state.output_error("Failed to change password.");
                }
            }
            UpdateResult::action(UpdateAction::schedule(
                state.settings.timing.password_exit(),
                Message::Exit(ExitReason::CriticalActionComplete),
            ))
        }
        call => {
            debug!("Unexpected critical completion {:?}", call);
            UpdateResult::none()
        }
    }
}

/// Network POST and reboot completions of the IP change
fn advance_change_ip(
    state: &mut AppState,
    call: RemoteCall,
    result: RemoteResult<CommandOutput>,
) -> UpdateResult {
    let Some(Flow::ChangeIp(flow)) = state.flow.as_mut() else {
        warn!("{:?} completed with no IP change in progress", call);
        return UpdateResult::none();
    };

    let expected = match flow.stage {
        ChangeIpStage::Posting => RemoteCall::SetNetwork,
        ChangeIpStage::Rebooting => RemoteCall::NetworkReboot,
        stage => {
            warn!("{:?} completed in stage {:?}", call, stage);
            return UpdateResult::none();
        }
    };
    if call != expected {
        warn!("Out of order completion {:?}, expected {:?}", call, expected);
        return UpdateResult::none();
    }

    let stage = flow.step_completed(result.is_ok());
    let (index, ip) = (flow.index, flow.ip.clone());
    match (stage, result) {
        (ChangeIpStage::Rebooting, Ok(output)) => {
            state.output_info(format!("Network response: {}", output.text()));
            start_call(
                state,
                RemoteCall::NetworkReboot,
                stage.status_text(),
                RemoteAction::reboot,
            )
            .unwrap_or_else(|e| report_error(state, "Failed to change IP", e))
        }
        (ChangeIpStage::Persisting, _) => {
            state.set_loading_text(stage.status_text());
            UpdateResult::action(UpdateAction::PersistIp { index, ip })
        }
        (_, Err(e)) => {
            warn!("IP change failed at {:?}: {}", call, e);
            state.flow = None;
            state.finish_loading();
            state.output_error(ChangeIpStage::Failed.status_text());
            UpdateResult::none()
        }
        (stage, Ok(_)) => {
            debug!("IP change in stage {:?}", stage);
            UpdateResult::none()
        }
    }
}

/// The registry write for the new address finished
pub fn handle_ip_persisted(
    state: &mut AppState,
    result: std::result::Result<(), String>,
) -> UpdateResult {
    let Some(Flow::ChangeIp(flow)) = state.flow.as_mut() else {
        warn!("IP persisted with no IP change in progress");
        return UpdateResult::none();
    };

    let stage = flow.step_completed(result.is_ok());
    let ip = flow.ip.clone();
    state.flow = None;

    match result {
        Ok(()) => {
            info!("Device address saved: {}", ip);
            state.session.set_ip(ip);
            state.set_loading_text(stage.status_text());
            state.output_info(stage.status_text());
        }
        Err(e) => {
            error!("Failed to save new address {}: {}", ip, e);
            let text = format!("Failed to save new IP: {}", e);
            state.set_loading_text(text.clone());
            state.output_error(text);
        }
    }

    // The device has already rebooted onto the new address
    UpdateResult::action(UpdateAction::schedule(
        state.settings.timing.critical_exit(),
        Message::Exit(ExitReason::CriticalActionComplete),
    ))
}
