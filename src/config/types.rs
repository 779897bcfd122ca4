//! Configuration types for Charger Console
//!
//! Defines `Settings` and its per-section sub-types. Every field has a
//! default so a partial (or absent) config file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathSettings,

    #[serde(default)]
    pub artifacts: ArtifactSettings,

    #[serde(default)]
    pub device: DeviceSettings,

    #[serde(default)]
    pub network: NetworkSettings,

    #[serde(default)]
    pub security: SecuritySettings,

    #[serde(default)]
    pub timing: TimingSettings,
}

/// Local filesystem locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathSettings {
    /// Device registry file (JSON object: index -> IPv4)
    #[serde(default = "default_registry")]
    pub registry: PathBuf,

    /// Root directory for artifact folders
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Firmware images, relative to `base_dir`
    #[serde(default = "default_firmware_dir")]
    pub firmware_dir: PathBuf,

    /// Patch scripts, relative to `base_dir`
    #[serde(default = "default_patch_dir")]
    pub patch_dir: PathBuf,

    /// Configuration blobs (uploaded and downloaded), relative to `base_dir`
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Retrieved log archives, relative to `base_dir`
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            base_dir: default_base_dir(),
            firmware_dir: default_firmware_dir(),
            patch_dir: default_patch_dir(),
            config_dir: default_config_dir(),
            logs_dir: default_logs_dir(),
        }
    }
}

impl PathSettings {
    pub fn firmware(&self) -> PathBuf {
        self.base_dir.join(&self.firmware_dir)
    }

    pub fn patches(&self) -> PathBuf {
        self.base_dir.join(&self.patch_dir)
    }

    pub fn configs(&self) -> PathBuf {
        self.base_dir.join(&self.config_dir)
    }

    pub fn logs(&self) -> PathBuf {
        self.base_dir.join(&self.logs_dir)
    }
}

fn default_registry() -> PathBuf {
    PathBuf::from("chIP.json")
}

fn default_base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("log_app-TUI")
}

fn default_firmware_dir() -> PathBuf {
    PathBuf::from("source")
}

fn default_patch_dir() -> PathBuf {
    PathBuf::from("patch")
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("config")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

/// Filters used when listing uploadable artifacts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactSettings {
    #[serde(default = "default_firmware_extension")]
    pub firmware_extension: String,

    #[serde(default = "default_patch_extension")]
    pub patch_extension: String,

    /// Config files are matched by substring rather than extension
    #[serde(default = "default_config_marker")]
    pub config_marker: String,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            firmware_extension: default_firmware_extension(),
            patch_extension: default_patch_extension(),
            config_marker: default_config_marker(),
        }
    }
}

fn default_firmware_extension() -> String {
    ".raucb".to_string()
}

fn default_patch_extension() -> String {
    ".vsecc".to_string()
}

fn default_config_marker() -> String {
    "config".to_string()
}

/// Remote device settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceSettings {
    /// URL scheme for the device API
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Device list label prefix ("vSECC" renders as "vSECC_1 >>>")
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,

    /// Optional request timeout; absent means the transport default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            label_prefix: default_label_prefix(),
            request_timeout_secs: None,
        }
    }
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_label_prefix() -> String {
    "vSECC".to_string()
}

/// Static network payload sent with an IP change
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NetworkSettings {
    #[serde(default = "default_prefix_len")]
    pub prefix_len: u8,

    #[serde(default = "default_dns")]
    pub dns: String,

    #[serde(default = "default_gateway")]
    pub gateway: String,

    #[serde(default = "default_interface")]
    pub interface: String,

    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            prefix_len: default_prefix_len(),
            dns: default_dns(),
            gateway: default_gateway(),
            interface: default_interface(),
            mode: default_mode(),
        }
    }
}

fn default_prefix_len() -> u8 {
    24
}

fn default_dns() -> String {
    "8.8.8.8".to_string()
}

fn default_gateway() -> String {
    "192.168.3.1".to_string()
}

fn default_interface() -> String {
    "eth1".to_string()
}

fn default_mode() -> String {
    "static".to_string()
}

/// Second-factor secrets gating the critical settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecuritySettings {
    #[serde(default = "default_change_ip_vip")]
    pub change_ip_vip: String,

    #[serde(default = "default_change_password_vip")]
    pub change_password_vip: String,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            change_ip_vip: default_change_ip_vip(),
            change_password_vip: default_change_password_vip(),
        }
    }
}

fn default_change_ip_vip() -> String {
    "donotchangeip".to_string()
}

fn default_change_password_vip() -> String {
    "donotchangepassword".to_string()
}

/// Fixed delays used by the flows
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingSettings {
    /// Delay before re-showing the login prompt after a transport failure
    #[serde(default = "default_login_retry_ms")]
    pub login_retry_ms: u64,

    /// Auto-dismiss delay for informational notices
    #[serde(default = "default_notice_dismiss_ms")]
    pub notice_dismiss_ms: u64,

    /// Wait after the post-flash reboot before reporting success
    #[serde(default = "default_firmware_reboot_wait_secs")]
    pub firmware_reboot_wait_secs: u64,

    /// Exit delay after an IP change or a rejected critical input
    #[serde(default = "default_critical_exit_secs")]
    pub critical_exit_secs: u64,

    /// Exit delay after a password change attempt
    #[serde(default = "default_password_exit_secs")]
    pub password_exit_secs: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            login_retry_ms: default_login_retry_ms(),
            notice_dismiss_ms: default_notice_dismiss_ms(),
            firmware_reboot_wait_secs: default_firmware_reboot_wait_secs(),
            critical_exit_secs: default_critical_exit_secs(),
            password_exit_secs: default_password_exit_secs(),
        }
    }
}

impl TimingSettings {
    pub fn login_retry(&self) -> Duration {
        Duration::from_millis(self.login_retry_ms)
    }

    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_millis(self.notice_dismiss_ms)
    }

    pub fn firmware_reboot_wait(&self) -> Duration {
        Duration::from_secs(self.firmware_reboot_wait_secs)
    }

    pub fn critical_exit(&self) -> Duration {
        Duration::from_secs(self.critical_exit_secs)
    }

    pub fn password_exit(&self) -> Duration {
        Duration::from_secs(self.password_exit_secs)
    }
}

fn default_login_retry_ms() -> u64 {
    2000
}

fn default_notice_dismiss_ms() -> u64 {
    2000
}

fn default_firmware_reboot_wait_secs() -> u64 {
    60
}

fn default_critical_exit_secs() -> u64 {
    4
}

fn default_password_exit_secs() -> u64 {
    8
}
