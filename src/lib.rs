//! Charger Console Library
//!
//! A TUI operator console for managing remote charger devices over HTTP.

// Module declarations
pub mod app;
pub mod common;
pub mod config;
pub mod core;
pub mod device;
pub mod tui;

// Re-export main entry point
pub use app::run;
