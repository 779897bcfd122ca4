//! Terminal event polling

use crate::app::message::Message;
use crate::common::prelude::*;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            // Release/repeat events would double every keystroke on some terminals
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Message::Key(key))),
            Event::Key(key) => {
                trace!("Ignoring non-Press key event (kind={:?})", key.kind);
                Ok(None)
            }
            // Resize redraws on the next frame
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}
