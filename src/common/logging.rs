//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "CHARGER_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/charger-console/logs/` since the TUI
/// owns stdout. Log level is controlled by the `CHARGER_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// CHARGER_LOG=debug charger-console
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "charger-console.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("charger_console=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| super::error::Error::config(format!("logging already initialized: {e}")))?;

    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("charger-console").join("logs")
}
