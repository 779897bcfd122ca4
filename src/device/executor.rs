//! Command executor: fire one request at a device
//!
//! No retries. The only timeout is the optional one from
//! `[device] request_timeout_secs`; without it a hung device hangs the call.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Body, Client};
use tokio::io::AsyncWriteExt;
use trait_variant::make;

use super::action::{RemoteAction, RequestBody};
use crate::common::prelude::*;
use crate::config::DeviceSettings;

/// Why a remote call did not complete
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Connection, DNS, or mid-body failure
    #[error("transport failure: {0}")]
    Transport(String),

    /// Device answered with a 5xx status
    #[error("device returned status {0}")]
    Status(u16),

    /// Local upload source or download target could not be used
    #[error("local file error: {0}")]
    Io(String),
}

/// Result of a single remote call
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

impl RemoteError {
    fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }

    fn io(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Successful completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Response body, trimmed
    Text(String),
    /// Response body was streamed to a local file
    Written { path: PathBuf, bytes: u64 },
}

impl CommandOutput {
    /// Text body, or empty for file downloads
    pub fn text(&self) -> &str {
        match self {
            CommandOutput::Text(text) => text,
            CommandOutput::Written { .. } => "",
        }
    }

    /// One-line summary for the output pane
    pub fn summary(&self) -> String {
        match self {
            CommandOutput::Text(text) => text.clone(),
            CommandOutput::Written { path, bytes } => {
                format!("Saved {} bytes to {}", bytes, path.display())
            }
        }
    }
}

#[make(Send)]
pub trait CommandExecutor {
    /// Run `action` against the device at `ip`
    async fn execute(&self, ip: &str, action: RemoteAction) -> RemoteResult<CommandOutput>;
}

/// reqwest-backed executor used by the running console
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
    scheme: String,
}

impl HttpExecutor {
    pub fn new(settings: &DeviceSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            scheme: settings.scheme.clone(),
        })
    }
}

impl CommandExecutor for HttpExecutor {
    async fn execute(&self, ip: &str, action: RemoteAction) -> RemoteResult<CommandOutput> {
        let url = action.url(&self.scheme, ip);
        info!("{} {url}", action.method);

        let mut request = self
            .client
            .request(action.method.into(), &url)
            .header(ACCEPT, action.accept);

        if let Some(token) = &action.bearer {
            request = request.bearer_auth(token);
        }

        request = match &action.body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => {
                let body = serde_json::to_vec(value).map_err(|e| RemoteError::Io(e.to_string()))?;
                request.header(CONTENT_TYPE, "application/json").body(body)
            }
            RequestBody::File(path) => {
                let file = tokio::fs::File::open(path).await.map_err(RemoteError::io)?;
                request
                    .header(CONTENT_TYPE, "application/octet-stream")
                    .body(Body::from(file))
            }
        };

        let mut response = request.send().await.map_err(RemoteError::transport)?;

        let status = response.status();
        if status.is_server_error() {
            warn!("{} {url} failed with {status}", action.method);
            return Err(RemoteError::Status(status.as_u16()));
        }
        debug!("{} {url} -> {status}", action.method);

        let Some(dest) = action.output else {
            let body = response.text().await.map_err(RemoteError::transport)?;
            return Ok(CommandOutput::Text(body.trim().to_string()));
        };

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(RemoteError::io)?;
        }
        let mut file = tokio::fs::File::create(&dest)
            .await
            .map_err(RemoteError::io)?;

        let mut bytes = 0u64;
        while let Some(chunk) = response.chunk().await.map_err(RemoteError::transport)? {
            file.write_all(&chunk).await.map_err(RemoteError::io)?;
            bytes += chunk.len() as u64;
        }
        file.flush().await.map_err(RemoteError::io)?;

        Ok(CommandOutput::Written { path: dest, bytes })
    }
}
