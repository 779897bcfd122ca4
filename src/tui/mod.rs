//! TUI presentation layer
//!
//! - `runner`: entry point and event loop
//! - `process`: message processing and main-loop-only actions
//! - `actions`: background remote calls and timers
//! - `event`: terminal event polling
//! - `layout`: screen areas
//! - `render`: frame rendering
//! - `terminal`: panic-safe terminal restore
//! - `theme` / `widgets`: styling and UI components

pub mod actions;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
