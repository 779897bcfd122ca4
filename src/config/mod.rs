//! Configuration file parsing for Charger Console
//!
//! Supports a single TOML settings file; every key is optional.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
