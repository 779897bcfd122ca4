//! Test doubles for the remote transport

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::device::{CommandExecutor, CommandOutput, RemoteAction, RemoteResult};

/// Records every call and answers from a script
///
/// Unscripted calls succeed with an empty text body.
#[derive(Debug, Default)]
pub struct FakeExecutor {
    calls: Mutex<Vec<(String, RemoteAction)>>,
    responses: Mutex<VecDeque<RemoteResult<CommandOutput>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next unanswered call
    pub fn respond(&self, result: RemoteResult<CommandOutput>) -> &Self {
        self.responses.lock().unwrap().push_back(result);
        self
    }

    pub fn respond_text(&self, body: &str) -> &Self {
        self.respond(Ok(CommandOutput::Text(body.to_string())))
    }

    /// `(ip, action)` pairs in call order
    pub fn calls(&self) -> Vec<(String, RemoteAction)> {
        self.calls.lock().unwrap().clone()
    }

    /// API paths in call order
    pub fn paths(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(_, a)| a.path).collect()
    }
}

impl CommandExecutor for FakeExecutor {
    async fn execute(&self, ip: &str, action: RemoteAction) -> RemoteResult<CommandOutput> {
        self.calls.lock().unwrap().push((ip.to_string(), action));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput::Text(String::new())))
    }
}
