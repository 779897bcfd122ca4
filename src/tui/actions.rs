//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::message::{Message, RemoteCall};
use crate::app::UpdateAction;
use crate::device::{CommandExecutor, RemoteAction};

/// Execute an action by spawning a background task
///
/// `PersistIp` and `OpenEditor` touch main-loop-only resources and are
/// handled by `process` before reaching here.
pub fn handle_action<E>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, executor: &Arc<E>)
where
    E: CommandExecutor + Send + Sync + 'static,
{
    match action {
        UpdateAction::Remote { call, ip, action } => {
            spawn_remote_call(call, ip, action, msg_tx, Arc::clone(executor));
        }

        UpdateAction::Schedule { delay, message } => {
            spawn_timer(delay, *message, msg_tx);
        }

        UpdateAction::PersistIp { .. } | UpdateAction::OpenEditor { .. } => {
            warn!("{:?} must be handled on the main loop", action);
        }
    }
}

/// Run one remote call and report its completion
fn spawn_remote_call<E>(
    call: RemoteCall,
    ip: String,
    action: RemoteAction,
    msg_tx: mpsc::Sender<Message>,
    executor: Arc<E>,
) where
    E: CommandExecutor + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("{:?} -> {} {}", call, ip, action.path);
        let result = executor.execute(&ip, action).await;
        if let Err(ref e) = result {
            warn!("{:?} against {} failed: {}", call, ip, e);
        }
        // The receiver is gone only when the app is exiting
        let _ = msg_tx.send(Message::RemoteDone { call, result }).await;
    });
}

/// Deliver `message` after `delay`
fn spawn_timer(delay: Duration, message: Message, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = msg_tx.send(message).await;
    });
}
