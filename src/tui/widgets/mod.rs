//! Custom widget components

mod dialogs;
mod header;
mod hot_zones;
mod login_panel;
mod menu_list;
pub mod modal_overlay;
mod output;

pub use dialogs::{FilePickerBox, LoadingBox, NoticeBox, PromptBox};
pub use header::MainHeader;
pub use hot_zones::HotZones;
pub use login_panel::LoginPanel;
pub use menu_list::MenuList;
pub use output::OutputPane;
