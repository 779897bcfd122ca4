//! Login submission and the follow-up auth probe

use crate::app::message::{Message, RemoteCall};
use crate::app::navigation::Screen;
use crate::app::state::{AppState, LoginField};
use crate::common::prelude::*;
use crate::device::{CommandOutput, RemoteAction, RemoteResult};

use super::{report_error, UpdateAction, UpdateResult};

/// Body the device returns for a wrong username or password
const INVALID_PASSWORD: &str = "Invalid password";

/// Enter in the login form
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.login.field == LoginField::Username {
        state.login.field = LoginField::Password;
        return UpdateResult::none();
    }

    // Blank-looking fields are rejected, but credentials are sent as typed
    let username = state.login.username.clone();
    let password = state.login.password.clone();
    if username.trim().is_empty() || password.trim().is_empty() {
        debug!("Login submitted with an empty field, ignoring");
        return UpdateResult::none();
    }

    let ip = match state.session.ip() {
        Ok(ip) => ip.to_string(),
        Err(e) => return report_error(state, "Login failed", e),
    };

    info!("Logging in to {} as {}", ip, username);
    state.session.set_password(password.clone());
    state.begin_loading("Please wait...");

    UpdateResult::action(UpdateAction::Remote {
        call: RemoteCall::Login,
        ip,
        action: RemoteAction::login(&username, &password),
    })
}

pub fn handle_login_done(
    state: &mut AppState,
    result: RemoteResult<CommandOutput>,
) -> UpdateResult {
    let body = match result {
        Ok(output) => output.text().to_string(),
        Err(e) => {
            warn!("Login request failed: {}", e);
            state.set_loading_text("Failed to connect.  Try again.");
            return UpdateResult::action(UpdateAction::schedule(
                state.settings.timing.login_retry(),
                Message::ShowLogin,
            ));
        }
    };

    if body == INVALID_PASSWORD {
        info!("Device rejected the credentials");
        state.finish_loading_to(Screen::Login);
        state.login.clear();
        state.login.rejected = true;
        return UpdateResult::none();
    }

    state.session.set_pending_token(body);
    let ip = match state.session.ip() {
        Ok(ip) => ip.to_string(),
        Err(e) => return report_error(state, "Login failed", e),
    };
    let action = match state.session.pending_token() {
        Ok(token) => RemoteAction::testing_auth(token),
        Err(e) => return report_error(state, "Login failed", e),
    };

    UpdateResult::action(UpdateAction::Remote {
        call: RemoteCall::AuthProbe,
        ip,
        action,
    })
}

pub fn handle_probe_done(
    state: &mut AppState,
    result: RemoteResult<CommandOutput>,
) -> UpdateResult {
    if let Err(e) = result {
        warn!("Auth probe failed: {}", e);
        state.session.clear_token();
        state.set_loading_text("Authentication failed. Try again.");
        return UpdateResult::action(UpdateAction::schedule(
            state.settings.timing.login_retry(),
            Message::ShowLogin,
        ));
    }

    if let Err(e) = state.session.confirm_pending_token() {
        return report_error(state, "Login failed", e);
    }

    info!("Authenticated");
    state.login.reset();
    state.finish_loading_to(Screen::Menu);
    UpdateResult::none()
}
