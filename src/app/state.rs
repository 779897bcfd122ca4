//! Application state (Model in TEA pattern)

use std::collections::VecDeque;
use std::fmt;

use super::flows::Flow;
use super::navigation::{Focus, Screen};
use super::overlay::{Notice, NoticeLevel, Overlay};
use super::session::Session;
use crate::config::Settings;
use crate::core::{Device, ExitReason};
use crate::device::DeviceRegistry;

/// Lines kept in the output pane
pub const OUTPUT_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Exiting(ExitReason),
}

// ─────────────────────────────────────────────────────────────────
// Output pane
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub level: OutputLevel,
    pub text: String,
}

/// Bounded log of action results, newest last
#[derive(Debug, Default)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
}

impl OutputLog {
    pub fn push(&mut self, level: OutputLevel, text: impl Into<String>) {
        // Multi-line bodies are split so the cap counts rendered lines
        for line in text.into().lines() {
            self.lines.push_back(OutputLine {
                level,
                text: line.to_string(),
            });
        }
        while self.lines.len() > OUTPUT_CAPACITY {
            self.lines.pop_front();
        }
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &OutputLine> + ExactSizeIterator {
        self.lines.iter()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.back()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────
// Login form
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Default, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub field: LoginField,
    /// The device answered "Invalid password" to the last attempt
    pub rejected: bool,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("field", &self.field)
            .field("rejected", &self.rejected)
            .finish()
    }
}

impl LoginForm {
    pub fn username_label(&self) -> &'static str {
        if self.rejected {
            " Incorrect! Enter Username "
        } else {
            " Username "
        }
    }

    pub fn password_label(&self) -> &'static str {
        if self.rejected {
            " Incorrect! Enter Password "
        } else {
            " Password "
        }
    }

    /// Clear both fields and focus the username
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.field = LoginField::Username;
    }

    pub fn reset(&mut self) {
        self.clear();
        self.rejected = false;
    }

    pub fn active_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Loading box
// ─────────────────────────────────────────────────────────────────

/// The loading indicator and the screen to return to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loading {
    pub text: String,
    pub origin: Screen,
    pub origin_selected: usize,
}

// ─────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Device addresses; mutated only from the main loop
    pub registry: DeviceRegistry,

    pub session: Session,

    /// Active screen
    pub screen: Screen,

    /// Screen or hot-zone focus
    pub focus: Focus,

    /// Selected row of the active list screen
    pub selected: usize,

    pub login: LoginForm,

    /// Set while `screen` is `Loading`
    pub loading: Option<Loading>,

    /// Top-most transient dialog
    pub overlay: Option<Overlay>,

    /// Chained remote flow in progress
    pub flow: Option<Flow>,

    /// Result pane
    pub output: OutputLog,

    pub phase: Phase,

    next_notice_id: u64,
}

impl AppState {
    pub fn new(settings: Settings, registry: DeviceRegistry) -> Self {
        Self {
            settings,
            registry,
            session: Session::new(),
            screen: Screen::DeviceSelect,
            focus: Focus::Screen,
            selected: 0,
            login: LoginForm::default(),
            loading: None,
            overlay: None,
            flow: None,
            output: OutputLog::default(),
            phase: Phase::Running,
            next_notice_id: 0,
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        matches!(self.phase, Phase::Exiting(_))
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        match self.phase {
            Phase::Exiting(reason) => Some(reason),
            Phase::Running => None,
        }
    }

    pub fn exit(&mut self, reason: ExitReason) {
        if self.phase == Phase::Running {
            self.phase = Phase::Exiting(reason);
        }
    }

    /// A remote call or flow is outstanding; no new action may start
    pub fn is_busy(&self) -> bool {
        self.screen == Screen::Loading
    }

    /// Switch to `screen` with a fresh selection and screen focus
    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected = 0;
        self.focus = Focus::Screen;
        self.overlay = None;
    }

    /// Enter the loading box, remembering where to return
    pub fn begin_loading(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.loading.as_mut() {
            Some(loading) => loading.text = text,
            None => {
                self.loading = Some(Loading {
                    text,
                    origin: self.screen,
                    origin_selected: self.selected,
                });
            }
        }
        self.screen = Screen::Loading;
        self.focus = Focus::Screen;
        self.overlay = None;
    }

    pub fn set_loading_text(&mut self, text: impl Into<String>) {
        if let Some(loading) = self.loading.as_mut() {
            loading.text = text.into();
        }
    }

    /// Leave the loading box for the screen it was entered from
    pub fn finish_loading(&mut self) {
        if let Some(loading) = self.loading.take() {
            self.screen = loading.origin;
            self.selected = loading.origin_selected;
        }
    }

    /// Leave the loading box for a specific screen
    pub fn finish_loading_to(&mut self, screen: Screen) {
        self.loading = None;
        self.show(screen);
    }

    /// Show an auto-dismissing notice; returns its id
    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.overlay = Some(Overlay::Notice(Notice {
            id,
            text: text.into(),
            level,
        }));
        id
    }

    pub fn output_info(&mut self, text: impl Into<String>) {
        self.output.push(OutputLevel::Info, text);
    }

    pub fn output_error(&mut self, text: impl Into<String>) {
        self.output.push(OutputLevel::Error, text);
    }

    /// Device list rows, in registry order
    pub fn devices(&self) -> Vec<Device> {
        self.registry.devices()
    }

    /// Row count of the active list screen
    pub fn row_count(&self) -> usize {
        match self.screen {
            Screen::DeviceSelect => self.registry.len(),
            screen => screen.item_count(),
        }
    }
}
