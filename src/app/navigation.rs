//! Screens, their items, and back/quit navigation

/// The active screen. Exactly one is shown at a time; overlays stack on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    DeviceSelect,
    Login,
    /// Transient: a remote call or multi-step flow is outstanding
    Loading,
    Menu,
    Firmware,
    Logs,
    Config,
    CriticalSettings,
}

/// Where Back leads from a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    To(Screen),
    Exit,
    /// Back is not available (a call is in flight)
    Blocked,
}

impl Screen {
    pub fn back(self) -> BackTarget {
        match self {
            Screen::Firmware | Screen::Logs | Screen::Config | Screen::CriticalSettings => {
                BackTarget::To(Screen::Menu)
            }
            Screen::Menu => BackTarget::To(Screen::Login),
            Screen::Login => BackTarget::To(Screen::DeviceSelect),
            Screen::DeviceSelect => BackTarget::Exit,
            Screen::Loading => BackTarget::Blocked,
        }
    }

    /// Box title
    pub fn title(self) -> &'static str {
        match self {
            Screen::DeviceSelect => " Select Device ",
            Screen::Login => " Login ",
            Screen::Loading => " Loading... ",
            Screen::Menu => " Menu ",
            Screen::Firmware => " Firmware ",
            Screen::Logs => " Logs ",
            Screen::Config => " Configuration ",
            Screen::CriticalSettings => " Critical Settings ",
        }
    }

    /// Number of selectable rows for list screens (device list excluded)
    pub fn item_count(self) -> usize {
        match self {
            Screen::Menu => MenuItem::ALL.len(),
            Screen::Firmware => FirmwareItem::ALL.len(),
            Screen::Logs => LogsItem::ALL.len(),
            Screen::Config => ConfigItem::ALL.len(),
            Screen::CriticalSettings => CriticalItem::ALL.len(),
            Screen::DeviceSelect | Screen::Login | Screen::Loading => 0,
        }
    }

    /// Row labels for list screens
    pub fn item_labels(self) -> Vec<&'static str> {
        match self {
            Screen::Menu => MenuItem::ALL.iter().map(|i| i.label()).collect(),
            Screen::Firmware => FirmwareItem::ALL.iter().map(|i| i.label()).collect(),
            Screen::Logs => LogsItem::ALL.iter().map(|i| i.label()).collect(),
            Screen::Config => ConfigItem::ALL.iter().map(|i| i.label()).collect(),
            Screen::CriticalSettings => CriticalItem::ALL.iter().map(|i| i.label()).collect(),
            Screen::DeviceSelect | Screen::Login | Screen::Loading => Vec::new(),
        }
    }
}

/// The always-reachable Back / Quit controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotZone {
    Back,
    Quit,
}

/// What keyboard input is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Screen,
    Zone(HotZone),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Firmware,
    Logs,
    Config,
    CriticalSettings,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Firmware,
        MenuItem::Logs,
        MenuItem::Config,
        MenuItem::CriticalSettings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Firmware => "Firmware",
            MenuItem::Logs => "System_Log",
            MenuItem::Config => "Config_Setting",
            MenuItem::CriticalSettings => "Critical Settings",
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            MenuItem::Firmware => Screen::Firmware,
            MenuItem::Logs => Screen::Logs,
            MenuItem::Config => Screen::Config,
            MenuItem::CriticalSettings => Screen::CriticalSettings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareItem {
    CheckVersion,
    Update,
    Reboot,
    Script,
}

impl FirmwareItem {
    pub const ALL: [FirmwareItem; 4] = [
        FirmwareItem::CheckVersion,
        FirmwareItem::Update,
        FirmwareItem::Reboot,
        FirmwareItem::Script,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FirmwareItem::CheckVersion => "Check Version",
            FirmwareItem::Update => "Update",
            FirmwareItem::Reboot => "Reboot",
            FirmwareItem::Script => "Script",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogsItem {
    GetLogs,
}

impl LogsItem {
    pub const ALL: [LogsItem; 1] = [LogsItem::GetLogs];

    pub fn label(self) -> &'static str {
        match self {
            LogsItem::GetLogs => "Get Logs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigItem {
    GetConfiguration,
    SetConfiguration,
    EditFile,
}

impl ConfigItem {
    pub const ALL: [ConfigItem; 3] = [
        ConfigItem::GetConfiguration,
        ConfigItem::SetConfiguration,
        ConfigItem::EditFile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConfigItem::GetConfiguration => "Get Configuration",
            ConfigItem::SetConfiguration => "Set Configuration",
            ConfigItem::EditFile => "Edit file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticalItem {
    ChangeIp,
    ChangePassword,
}

impl CriticalItem {
    pub const ALL: [CriticalItem; 2] = [CriticalItem::ChangeIp, CriticalItem::ChangePassword];

    pub fn label(self) -> &'static str {
        match self {
            CriticalItem::ChangeIp => "Change IP",
            CriticalItem::ChangePassword => "Change Password",
        }
    }
}
