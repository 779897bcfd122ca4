//! Transient dialogs stacked above the active screen

use std::fmt;
use std::path::PathBuf;

use crate::core::ArtifactKind;

/// What the picked file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickPurpose {
    FirmwareImage,
    PatchScript,
    UploadConfiguration,
    EditConfiguration,
}

impl PickPurpose {
    pub fn kind(self) -> ArtifactKind {
        match self {
            PickPurpose::FirmwareImage => ArtifactKind::Firmware,
            PickPurpose::PatchScript => ArtifactKind::Patch,
            PickPurpose::UploadConfiguration | PickPurpose::EditConfiguration => {
                ArtifactKind::Config
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PickPurpose::FirmwareImage => " Select Firmware File ",
            PickPurpose::PatchScript => " Select Patch File ",
            PickPurpose::UploadConfiguration => " Select Configuration File ",
            PickPurpose::EditConfiguration => " Select File to Edit ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePicker {
    pub purpose: PickPurpose,
    pub dir: PathBuf,
    pub files: Vec<String>,
    pub selected: usize,
}

impl FilePicker {
    pub fn new(purpose: PickPurpose, dir: PathBuf, files: Vec<String>) -> Self {
        Self {
            purpose,
            dir,
            files,
            selected: 0,
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.files.len() {
            self.selected += 1;
        }
    }

    pub fn selected_path(&self) -> Option<PathBuf> {
        self.files.get(self.selected).map(|name| self.dir.join(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    IpVip,
    NewIp,
    PasswordVip,
    NewPassword,
    ConfirmPassword,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::IpVip | PromptKind::PasswordVip => " Enter VIP Password ",
            PromptKind::NewIp => " Enter New IP ",
            PromptKind::NewPassword => " Enter New Password ",
            PromptKind::ConfirmPassword => " Confirm New Password ",
        }
    }

    pub fn masked(self) -> bool {
        !matches!(self, PromptKind::NewIp)
    }
}

/// Single-line text prompt
#[derive(Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
    /// New password carried into the confirmation prompt
    pub new_password: Option<String>,
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt")
            .field("kind", &self.kind)
            .field("input_len", &self.input.len())
            .finish()
    }
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
            new_password: None,
        }
    }

    pub fn confirm_password(new_password: String) -> Self {
        Self {
            kind: PromptKind::ConfirmPassword,
            input: String::new(),
            new_password: Some(new_password),
        }
    }

    /// Text as rendered (masked prompts show one `*` per character)
    pub fn display_text(&self) -> String {
        if self.kind.masked() {
            "*".repeat(self.input.chars().count())
        } else {
            self.input.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Informational message that dismisses itself after a delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Matches the scheduled dismissal to this notice
    pub id: u64,
    pub text: String,
    pub level: NoticeLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Picker(FilePicker),
    Prompt(Prompt),
    Notice(Notice),
}
