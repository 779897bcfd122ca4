//! Settings parser for config.toml

use super::types::Settings;
use crate::common::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "charger-console";

/// Default settings file location (`<config_dir>/charger-console/config.toml`)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from a TOML file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a default settings file, leaving an existing file untouched
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
        }
    }

    let default_content = r#"# Charger Console Configuration

[paths]
registry = "chIP.json"          # index -> IP map
# base_dir = "/home/operator/log_app-TUI"
firmware_dir = "source"
patch_dir = "patch"
config_dir = "config"
logs_dir = "logs"

[artifacts]
firmware_extension = ".raucb"
patch_extension = ".vsecc"
config_marker = "config"

[device]
scheme = "http"
label_prefix = "vSECC"
# request_timeout_secs = 30     # unset = no enforced timeout

[network]
prefix_len = 24
dns = "8.8.8.8"
gateway = "192.168.3.1"
interface = "eth1"
mode = "static"

[security]
change_ip_vip = "donotchangeip"
change_password_vip = "donotchangepassword"

[timing]
login_retry_ms = 2000
notice_dismiss_ms = 2000
firmware_reboot_wait_secs = 60
critical_exit_secs = 4
password_exit_secs = 8
"#;
    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    Ok(())
}
