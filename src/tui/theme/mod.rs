//! Colors and semantic styles shared by the widgets
//!
//! - `palette`: raw color constants
//! - `styles`: style and block builders

pub mod palette;
pub mod styles;
