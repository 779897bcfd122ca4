//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::message::Message;
use crate::app::state::AppState;
use crate::app::{editor, signals};
use crate::common::prelude::*;
use crate::config::Settings;
use crate::core::ExitReason;
use crate::device::{CommandExecutor, DeviceRegistry};

use super::{event, process, render, terminal};

/// Run the console until the operator quits or a critical action ends it
pub async fn run<E>(settings: Settings, registry: DeviceRegistry, executor: E) -> Result<ExitReason>
where
    E: CommandExecutor + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(settings, registry);

    // Unified message channel: remote completions, timers, signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::forward_termination(msg_tx.clone());

    let executor = Arc::new(executor);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &executor);

    // Restore terminal
    ratatui::restore();

    result?;
    Ok(state.exit_reason().unwrap_or(ExitReason::UserQuit))
}

/// Main event loop
fn run_loop<E>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    executor: &Arc<E>,
) -> Result<()>
where
    E: CommandExecutor + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Process background messages (completions, timers, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            if let Some(path) = process::process_message(state, msg, &msg_tx, executor) {
                run_editor(terminal, state, &path, &msg_tx, executor);
            }
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            if let Some(path) = process::process_message(state, message, &msg_tx, executor) {
                run_editor(terminal, state, &path, &msg_tx, executor);
            }
        }
    }

    Ok(())
}

/// Hand the terminal to the external editor and take it back
fn run_editor<E>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    path: &Path,
    msg_tx: &mpsc::Sender<Message>,
    executor: &Arc<E>,
) where
    E: CommandExecutor + Send + Sync + 'static,
{
    ratatui::restore();
    let result = editor::open_blocking(path).map_err(|e| e.to_string());
    *terminal = ratatui::init();

    if let Err(ref e) = result {
        warn!("Editor failed for {}: {}", path.display(), e);
    }
    // An editor message never requests another editor
    let _ = process::process_message(state, Message::EditorClosed { result }, msg_tx, executor);
}
