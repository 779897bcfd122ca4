//! Message processing through the TEA update loop
//!
//! Actions that need exclusive main-loop resources (the device registry,
//! the terminal) are resolved here; everything else is spawned by
//! `actions`.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::message::Message;
use crate::app::state::AppState;
use crate::app::{handler, UpdateAction};
use crate::device::CommandExecutor;

use super::actions::handle_action;

/// Process a message and all of its follow-ups
///
/// Returns the file to open when an update asked for the external editor;
/// the runner owns the terminal and performs the hand-over.
pub fn process_message<E>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    executor: &Arc<E>,
) -> Option<PathBuf>
where
    E: CommandExecutor + Send + Sync + 'static,
{
    let mut pending = VecDeque::from([message]);
    let mut editor_path = None;

    while let Some(msg) = pending.pop_front() {
        let result = handler::update(state, msg);

        match result.action {
            Some(UpdateAction::PersistIp { index, ip }) => {
                let result = state
                    .registry
                    .update_ip(index, &ip)
                    .map_err(|e| e.to_string());
                if let Err(ref e) = result {
                    error!("Registry write for device {} failed: {}", index, e);
                }
                pending.push_back(Message::IpPersisted { result });
            }
            Some(UpdateAction::OpenEditor { path }) => {
                info!("Editor requested for {}", path.display());
                editor_path = Some(path);
            }
            Some(action) => handle_action(action, msg_tx.clone(), executor),
            None => {}
        }

        // Continue with follow-up message
        if let Some(next) = result.message {
            pending.push_back(next);
        }
    }

    editor_path
}
