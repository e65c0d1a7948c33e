//! Stash module
//!
//! One [`FileLoad`] per input file, plus the pane that lists their items.

mod file_load;
pub mod item_lines;
pub mod stash_events;
mod stash_pane_state;
pub mod stash_render;

pub use file_load::FileLoad;
pub use stash_pane_state::{StashPaneState, StashRow, stash_rows};
