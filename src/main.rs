//! Charger Console - operator console for remote charger devices
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use charger_console::app::RunOptions;
use charger_console::common::prelude::*;
use charger_console::config;
use clap::Parser;

/// Charger Console - manage remote charger devices over HTTP
#[derive(Parser, Debug)]
#[command(name = "charger-console")]
#[command(about = "Operator console for remote charger devices", long_about = None)]
struct Args {
    /// Path to the settings file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the device registry (JSON index -> IP map)
    #[arg(long, value_name = "PATH")]
    registry: Option<PathBuf>,

    /// Base directory holding firmware, patch, config and log folders
    #[arg(long, value_name = "PATH")]
    base_dir: Option<PathBuf>,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::default_config_path);

    if args.init_config {
        config::init_config_file(&config_path)?;
        eprintln!("Wrote default settings to {}", config_path.display());
        return Ok(());
    }

    charger_console::run(RunOptions {
        config_path,
        registry_override: args.registry,
        base_dir_override: args.base_dir,
    })
    .await
}
