//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const POPUP_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Green;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
