//! d2stash library - Terminal viewer for game item stash exports
//!
//! This library exposes the core functionality of d2stash for testing purposes.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod help;
pub mod input;
pub mod item;
pub mod notification;
pub mod scroll;
pub mod stash;
pub mod stats;
pub mod summary;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
pub use error::StashError;
pub use filter::{Settings, is_hidden};
pub use item::{Item, Quality, Stat, parse_stash};
pub use stats::{Stats, aggregate};
