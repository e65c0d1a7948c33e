//! Item model for stash exports
//!
//! Passive data shapes for items, their stats and socketed sub-items, plus the
//! parser that turns one file's contents into a sequence of items.

mod item_types;
mod number;
mod stash_parser;
mod stat;

pub use item_types::{Item, Quality, SocketItem};
pub use number::{is_zero, number_text};
pub use stash_parser::parse_stash;
pub use stat::{CorruptedFlag, Stat, StatKind, StatRange, StatValue};
