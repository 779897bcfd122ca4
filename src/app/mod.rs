//! Application layer - state management and orchestration

pub mod editor;
pub mod flows;
pub mod handler;
pub mod message;
pub mod navigation;
pub mod overlay;
pub mod session;
pub mod signals;
pub mod state;

#[cfg(test)]
pub mod test_utils;

// Re-export handler types for event loop integration
pub use handler::{UpdateAction, UpdateResult};

pub use session::Session;

use std::path::PathBuf;

use crate::common::prelude::*;
use crate::config;
use crate::device::{DeviceRegistry, HttpExecutor};
use crate::tui;

/// Startup options collected by the binary
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Settings file (may not exist)
    pub config_path: PathBuf,
    /// Replaces `paths.registry`
    pub registry_override: Option<PathBuf>,
    /// Replaces `paths.base_dir`
    pub base_dir_override: Option<PathBuf>,
}

/// Main application entry point
///
/// Loads settings and the device registry, then runs the TUI until the
/// operator quits or a critical action ends the session. An unreadable
/// registry is fatal and reported before the terminal is touched.
pub async fn run(options: RunOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Charger Console starting");
    info!("═══════════════════════════════════════════════════════");

    let mut settings = config::load_settings(&options.config_path);
    if let Some(registry) = options.registry_override {
        settings.paths.registry = registry;
    }
    if let Some(base_dir) = options.base_dir_override {
        settings.paths.base_dir = base_dir;
    }
    info!("Registry: {}", settings.paths.registry.display());
    info!("Artifacts: {}", settings.paths.base_dir.display());

    let registry = DeviceRegistry::load(&settings.paths.registry).map_err(|e| {
        error!("Failed to load device registry: {}", e);
        e
    })?;
    info!("Loaded {} device(s)", registry.len());

    let executor = HttpExecutor::new(&settings.device)?;

    let result = tui::run(settings, registry, executor).await;

    match &result {
        Ok(reason) => info!("Charger Console exiting ({:?})", reason),
        Err(e) => error!("Application error: {:?}", e),
    }
    result.map(|_| ())
}
