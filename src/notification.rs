//! Transient notifications shown in the top-right corner
//!
//! Used for copy confirmations, config warnings, and load failures.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationKind, NotificationState};
