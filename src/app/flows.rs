//! Multi-step remote flows and critical-input checks
//!
//! Each chained flow is a small state machine. The update function owns the
//! flow value and advances it only when the completion message for the
//! current step arrives, so a step is never issued before its predecessor
//! has reported success.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{is_ipv4_format, DeviceIndex};

// ─────────────────────────────────────────────────────────────────
// Firmware update: Uploading -> Rebooting -> Waiting -> Done | Failed
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareStage {
    Uploading,
    Rebooting,
    Waiting,
    Done,
    Failed,
}

impl FirmwareStage {
    /// Loading box text for the stage
    pub fn status_text(self) -> &'static str {
        match self {
            FirmwareStage::Uploading => "Updating Firmware Please wait..",
            FirmwareStage::Rebooting => "Rebooting device Please wait...",
            FirmwareStage::Waiting => "Reboot Initiated Please wait...",
            FirmwareStage::Done => "Successfully Updated Firmware..!",
            FirmwareStage::Failed => "Firmware update failed.",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, FirmwareStage::Done | FirmwareStage::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareUpdate {
    pub image: PathBuf,
    pub stage: FirmwareStage,
}

impl FirmwareUpdate {
    pub fn new(image: PathBuf) -> Self {
        Self {
            image,
            stage: FirmwareStage::Uploading,
        }
    }

    /// Record the outcome of the current remote step (upload or reboot)
    ///
    /// Returns the new stage. Calling this in `Waiting` or a terminal stage
    /// leaves the flow untouched.
    pub fn step_completed(&mut self, ok: bool) -> FirmwareStage {
        self.stage = match (self.stage, ok) {
            (FirmwareStage::Uploading, true) => FirmwareStage::Rebooting,
            (FirmwareStage::Rebooting, true) => FirmwareStage::Waiting,
            (FirmwareStage::Uploading | FirmwareStage::Rebooting, false) => FirmwareStage::Failed,
            (stage, _) => stage,
        };
        self.stage
    }

    /// The post-reboot wait has elapsed
    pub fn wait_elapsed(&mut self) -> FirmwareStage {
        if self.stage == FirmwareStage::Waiting {
            self.stage = FirmwareStage::Done;
        }
        self.stage
    }
}

// ─────────────────────────────────────────────────────────────────
// Change IP: Posting -> Rebooting -> Persisting -> Done | Failed
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeIpStage {
    Posting,
    Rebooting,
    Persisting,
    Done,
    Failed,
}

impl ChangeIpStage {
    pub fn status_text(self) -> &'static str {
        match self {
            ChangeIpStage::Posting => "Applying network settings Please wait...",
            ChangeIpStage::Rebooting => "Reboot Initiated Please wait...",
            ChangeIpStage::Persisting => "Saving device address...",
            ChangeIpStage::Done => "IP Changed Successfully",
            ChangeIpStage::Failed => "Failed to change IP.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeIp {
    pub index: DeviceIndex,
    pub ip: String,
    pub stage: ChangeIpStage,
}

impl ChangeIp {
    pub fn new(index: DeviceIndex, ip: impl Into<String>) -> Self {
        Self {
            index,
            ip: ip.into(),
            stage: ChangeIpStage::Posting,
        }
    }

    pub fn step_completed(&mut self, ok: bool) -> ChangeIpStage {
        self.stage = match (self.stage, ok) {
            (ChangeIpStage::Posting, true) => ChangeIpStage::Rebooting,
            (ChangeIpStage::Rebooting, true) => ChangeIpStage::Persisting,
            (ChangeIpStage::Persisting, true) => ChangeIpStage::Done,
            (
                ChangeIpStage::Posting | ChangeIpStage::Rebooting | ChangeIpStage::Persisting,
                false,
            ) => ChangeIpStage::Failed,
            (stage, _) => stage,
        };
        self.stage
    }
}

/// A chained flow in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    FirmwareUpdate(FirmwareUpdate),
    ChangeIp(ChangeIp),
}

// ─────────────────────────────────────────────────────────────────
// Critical-input checks
// ─────────────────────────────────────────────────────────────────

/// A rejected critical-settings input. The session ends after one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CriticalAbort {
    #[error("Incorrect VIP password!")]
    VipPasswordRejected,

    #[error("Invalid IP address!")]
    InvalidIp,

    #[error("Passwords do not match!")]
    PasswordMismatch,
}

pub fn check_vip(entered: &str, expected: &str) -> Result<(), CriticalAbort> {
    if entered == expected {
        Ok(())
    } else {
        Err(CriticalAbort::VipPasswordRejected)
    }
}

pub fn check_new_ip(ip: &str) -> Result<(), CriticalAbort> {
    if is_ipv4_format(ip) {
        Ok(())
    } else {
        Err(CriticalAbort::InvalidIp)
    }
}

pub fn check_confirmation(new_password: &str, confirmation: &str) -> Result<(), CriticalAbort> {
    if new_password == confirmation {
        Ok(())
    } else {
        Err(CriticalAbort::PasswordMismatch)
    }
}
