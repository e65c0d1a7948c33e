use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Severity of a notification; decides its colors and lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    /// Stays until dismissed
    Error,
}

impl NotificationKind {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationKind::Info => Some(Duration::from_millis(1500)),
            NotificationKind::Warning => Some(Duration::from_secs(8)),
            NotificationKind::Error => None,
        }
    }

    fn colors(self) -> NotificationColors {
        use theme::notification::*;
        match self {
            NotificationKind::Info => NotificationColors {
                fg: INFO_FG,
                bg: INFO_BG,
                border: INFO_BORDER,
            },
            NotificationKind::Warning => NotificationColors {
                fg: WARNING_FG,
                bg: WARNING_BG,
                border: WARNING_BORDER,
            },
            NotificationKind::Error => NotificationColors {
                fg: ERROR_FG,
                bg: ERROR_BG,
                border: ERROR_BORDER,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationColors {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub colors: NotificationColors,
    pub created_at: Instant,
    /// `None` means permanent
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            colors: kind.colors(),
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.duration
            .is_some_and(|duration| self.created_at.elapsed() > duration)
    }
}

/// Holds at most one notification; a newer one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Error);
    }

    pub fn show_kind(&mut self, message: &str, kind: NotificationKind) {
        #[cfg(debug_assertions)]
        log::debug!("Notification ({:?}): {}", kind, message);

        self.current = Some(Notification::new(message, kind));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the current notification if its time is up; returns true if dropped
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(notif) = &self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// True while a permanent notification is waiting to be dismissed
    pub fn has_sticky(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|n| n.duration.is_none())
    }

    #[cfg(test)]
    pub(crate) fn expire_after(&mut self, duration: Duration) {
        if let Some(notif) = &mut self.current {
            notif.duration = Some(duration);
        }
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
