//! Outbound request descriptions
//!
//! A [`RemoteAction`] is one fully specified request against a device's
//! `/api/` surface, built by a screen handler and handed to a
//! [`CommandExecutor`](super::CommandExecutor). Building an action never
//! touches the network.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::config::NetworkSettings;

const ACCEPT_TEXT: &str = "text/plain";
const ACCEPT_JSON: &str = "application/json";
const ACCEPT_ANY: &str = "*/*";
const ACCEPT_BINARY: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// Request body
#[derive(Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// Streamed from a local file as `application/octet-stream`
    File(PathBuf),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // JSON bodies may carry credentials
        match self {
            RequestBody::Empty => f.write_str("Empty"),
            RequestBody::Json(_) => f.write_str("Json(..)"),
            RequestBody::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct RemoteAction {
    pub method: Method,
    /// Path below `/api/`, e.g. `system/reboot`
    pub path: &'static str,
    pub accept: &'static str,
    pub bearer: Option<String>,
    pub body: RequestBody,
    /// Stream the response body into this file instead of returning it
    pub output: Option<PathBuf>,
}

impl fmt::Debug for RemoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteAction")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("accept", &self.accept)
            .field("authenticated", &self.bearer.is_some())
            .field("body", &self.body)
            .field("output", &self.output)
            .finish()
    }
}

impl RemoteAction {
    fn new(method: Method, path: &'static str, accept: &'static str) -> Self {
        Self {
            method,
            path,
            accept,
            bearer: None,
            body: RequestBody::Empty,
            output: None,
        }
    }

    fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    fn file(mut self, path: &Path) -> Self {
        self.body = RequestBody::File(path.to_path_buf());
        self
    }

    fn output(mut self, path: &Path) -> Self {
        self.output = Some(path.to_path_buf());
        self
    }

    /// Full request URL for a device at `ip`
    pub fn url(&self, scheme: &str, ip: &str) -> String {
        let path = self.path.trim_start_matches('/');
        format!("{scheme}://{ip}/api/{path}")
    }

    // ─────────────────────────────────────────────────────────
    // Authentication
    // ─────────────────────────────────────────────────────────

    /// `POST /api/login`; the response is the raw token or the
    /// "Invalid password" sentinel
    pub fn login(name: &str, password: &str) -> Self {
        Self::new(Method::Post, "login", ACCEPT_TEXT)
            .json(json!({ "name": name, "password": password }))
    }

    /// `GET /api/testingAuth`, bearer-authenticated probe
    pub fn testing_auth(token: &str) -> Self {
        Self::new(Method::Get, "testingAuth", ACCEPT_TEXT).bearer(token)
    }

    // ─────────────────────────────────────────────────────────
    // Firmware
    // ─────────────────────────────────────────────────────────

    /// `GET /api/firmware` (unauthenticated)
    pub fn firmware_version() -> Self {
        Self::new(Method::Get, "firmware", ACCEPT_JSON)
    }

    pub fn upload_firmware(token: &str, image: &Path) -> Self {
        Self::new(Method::Post, "firmware", ACCEPT_ANY)
            .bearer(token)
            .file(image)
    }

    pub fn reboot(token: &str) -> Self {
        Self::new(Method::Put, "system/reboot", ACCEPT_ANY).bearer(token)
    }

    pub fn upload_script(token: &str, script: &Path) -> Self {
        Self::new(Method::Post, "scripts", ACCEPT_JSON)
            .bearer(token)
            .file(script)
    }

    // ─────────────────────────────────────────────────────────
    // Logs & configuration
    // ─────────────────────────────────────────────────────────

    pub fn download_logs(token: &str, dest: &Path) -> Self {
        Self::new(Method::Get, "logging/files", ACCEPT_BINARY)
            .bearer(token)
            .output(dest)
    }

    pub fn download_configuration(token: &str, dest: &Path) -> Self {
        Self::new(Method::Get, "configuration", ACCEPT_BINARY)
            .bearer(token)
            .output(dest)
    }

    pub fn upload_configuration(token: &str, file: &Path) -> Self {
        Self::new(Method::Post, "configuration", ACCEPT_ANY)
            .bearer(token)
            .file(file)
    }

    // ─────────────────────────────────────────────────────────
    // Critical settings
    // ─────────────────────────────────────────────────────────

    /// `POST /api/interfaces/network` with a single static interface entry
    pub fn set_network(token: &str, ip: &str, network: &NetworkSettings) -> Self {
        let entry = json!([{
            "address": format!("{}/{}", ip, network.prefix_len),
            "dns": network.dns,
            "gateway": network.gateway,
            "interface": network.interface,
            "mode": network.mode,
        }]);
        Self::new(Method::Post, "interfaces/network", ACCEPT_ANY)
            .bearer(token)
            .json(entry)
    }

    /// `PUT /api/users/credentials`; the body is the password as a JSON string
    pub fn set_credentials(token: &str, password: &str) -> Self {
        Self::new(Method::Put, "users/credentials", ACCEPT_ANY)
            .bearer(token)
            .json(Value::String(password.to_string()))
    }
}
