//! SIGINT/SIGTERM end the session the same way Quit does

use tokio::sync::mpsc;

use super::message::Message;
use crate::common::prelude::*;
use crate::core::ExitReason;

/// Forward the first termination signal to the event loop as `Exit(Signal)`
pub fn forward_termination(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match termination().await {
            Ok(name) => {
                info!("{} received, leaving the console", name);
                let _ = tx.send(Message::Exit(ExitReason::Signal)).await;
            }
            Err(e) => warn!("Signals unavailable, Ctrl+C in the console still quits: {}", e),
        }
    });
}

#[cfg(unix)]
async fn termination() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn termination() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_quiet_process_sends_no_exit() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        forward_termination(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }
}
