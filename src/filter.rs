//! Filter module
//!
//! Holds the user's hide/show toggles, decides per-item visibility, and
//! drives the filter menu pane.

mod evaluator;
pub mod filter_events;
mod filter_menu_state;
pub mod filter_render;
mod settings;

pub use evaluator::{is_hidden, visible_items};
pub use filter_menu_state::{FilterMenuState, FilterRow, filter_rows};
pub use settings::{FilterDimension, Settings};
