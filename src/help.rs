//! Help popup module
//!
//! Keyboard shortcut reference, plus the one-line hint bar at the bottom.

mod help_content;
pub mod help_line_render;
pub mod help_popup_render;
mod help_state;

pub use help_content::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
pub use help_state::HelpPopupState;
