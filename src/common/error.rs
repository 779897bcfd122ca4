//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

use crate::device::RemoteError;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Device Registry Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read device registry {path}: {reason}")]
    RegistryRead { path: PathBuf, reason: String },

    #[error("Invalid device registry: {message}")]
    RegistryInvalid { message: String },

    #[error("Device {index} is not in the registry")]
    UnknownDevice { index: u32 },

    // ─────────────────────────────────────────────────────────────
    // Session Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Session value not set: {field}")]
    SessionNotReady { field: &'static str },

    // ─────────────────────────────────────────────────────────────
    // Remote/Transport Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Remote call failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("No matching files in {dir}")]
    NoArtifacts { dir: PathBuf },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn registry_invalid(message: impl Into<String>) -> Self {
        Self::RegistryInvalid {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Remote(_) | Error::NoArtifacts { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::RegistryRead { .. }
                | Error::RegistryInvalid { .. }
                | Error::SessionNotReady { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}
