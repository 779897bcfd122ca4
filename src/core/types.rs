//! Core domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable 1-based device index, as keyed in the device registry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DeviceIndex(pub u32);

impl DeviceIndex {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeviceIndex {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A remote charger as loaded from the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub index: DeviceIndex,
    pub ip: String,
}

impl Device {
    pub fn new(index: impl Into<DeviceIndex>, ip: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            ip: ip.into(),
        }
    }

    /// List label, e.g. `vSECC_2 >>>`
    pub fn label(&self, prefix: &str) -> String {
        format!("{}_{} >>>", prefix, self.index)
    }
}

/// Why the console is shutting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Quit hot-zone, Ctrl+C, or Back from device selection
    UserQuit,
    /// A critical setting was applied (one critical action per session)
    CriticalActionComplete,
    /// A critical-settings input check failed
    CriticalInputRejected,
    /// SIGINT/SIGTERM
    Signal,
}

impl ExitReason {
    /// Process exit code. All in-app exits are clean exits.
    pub fn code(self) -> i32 {
        0
    }
}
