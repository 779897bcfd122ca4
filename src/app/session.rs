//! Session store: the selected device and its credentials
//!
//! Every getter is presence-checked and returns `Error::SessionNotReady`
//! when the corresponding setter has not run yet.

use std::fmt;

use crate::common::prelude::*;
use crate::core::{Device, DeviceIndex};

#[derive(Default, Clone)]
pub struct Session {
    device: Option<Device>,
    token: Option<String>,
    /// Token returned by login, awaiting the auth probe
    pending_token: Option<String>,
    password: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("device", &self.device)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a device. Any token from a previous device is dropped.
    pub fn set_device(&mut self, device: Device) {
        debug!("Session device -> {} ({})", device.index, device.ip);
        self.device = Some(device);
        self.token = None;
        self.pending_token = None;
        self.password = None;
    }

    /// Password typed at the last login attempt
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
        self.pending_token = None;
    }

    /// Hold a login token until the auth probe confirms it
    pub fn set_pending_token(&mut self, token: impl Into<String>) {
        self.pending_token = Some(token.into());
    }

    pub fn pending_token(&self) -> Result<&str> {
        self.pending_token
            .as_deref()
            .ok_or(Error::SessionNotReady {
                field: "pending token",
            })
    }

    /// Promote the probed token to the session token
    pub fn confirm_pending_token(&mut self) -> Result<()> {
        let token = self.pending_token.take().ok_or(Error::SessionNotReady {
            field: "pending token",
        })?;
        self.token = Some(token);
        Ok(())
    }

    /// Keep the selected device's address in sync after an IP change
    pub fn set_ip(&mut self, ip: impl Into<String>) {
        if let Some(device) = self.device.as_mut() {
            device.ip = ip.into();
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn device(&self) -> Result<&Device> {
        self.device
            .as_ref()
            .ok_or(Error::SessionNotReady { field: "device" })
    }

    pub fn ip(&self) -> Result<&str> {
        self.device().map(|d| d.ip.as_str())
    }

    pub fn index(&self) -> Result<DeviceIndex> {
        self.device().map(|d| d.index)
    }

    pub fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or(Error::SessionNotReady { field: "token" })
    }

    pub fn password(&self) -> Result<&str> {
        self.password
            .as_deref()
            .ok_or(Error::SessionNotReady { field: "password" })
    }
}
