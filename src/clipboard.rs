//! Clipboard module for d2stash
//!
//! Copies item JSON out of the viewer through one of two backends:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for SSH and tmux sessions)
//!
//! Auto mode tries the system clipboard first and falls back to OSC 52.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, copy_to_clipboard};
