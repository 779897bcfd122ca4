//! Message types for the application (TEA pattern)

use crossterm::event::KeyEvent;

use super::navigation::HotZone;
use crate::core::ExitReason;
use crate::device::{CommandOutput, RemoteResult};

/// Which remote call a completion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteCall {
    Login,
    AuthProbe,
    FirmwareVersion,
    FirmwareUpload,
    /// Reboot issued by the firmware update flow
    FirmwareReboot,
    /// Reboot requested from the Firmware screen
    Reboot,
    Script,
    GetLogs,
    GetConfiguration,
    SetConfiguration,
    SetNetwork,
    /// Reboot issued by the IP change flow
    NetworkReboot,
    SetCredentials,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event for periodic updates
    Tick,

    /// Quit from any state (Quit hot-zone, Ctrl+C, signal)
    Quit,

    /// Leave the event loop for a specific reason
    Exit(ExitReason),

    // ─────────────────────────────────────────────────────────
    // Navigation (produced by key handling)
    // ─────────────────────────────────────────────────────────
    /// Move the selection up
    Up,
    /// Move the selection down
    Down,
    /// Activate the selected row, submit a field, or press the focused zone
    Activate,
    /// Close the top overlay, or go back one screen
    Back,
    /// Focus a hot-zone
    FocusZone(HotZone),
    /// Return focus from the hot-zones to the screen
    FocusScreen,

    // ─────────────────────────────────────────────────────────
    // Text input
    // ─────────────────────────────────────────────────────────
    Input(char),
    Backspace,
    /// Move from the username field to the password field
    NextField,

    // ─────────────────────────────────────────────────────────
    // Completions and timers
    // ─────────────────────────────────────────────────────────
    /// A remote call finished
    RemoteDone {
        call: RemoteCall,
        result: RemoteResult<CommandOutput>,
    },

    /// Leave the loading box and show the login form again
    ShowLogin,

    /// The post-reboot wait of a firmware update elapsed
    FirmwareWaitElapsed,

    /// The registry write for an IP change finished
    IpPersisted { result: Result<(), String> },

    /// Auto-dismiss the notice with this id
    DismissNotice(u64),

    /// The external editor exited
    EditorClosed { result: Result<(), String> },
}
