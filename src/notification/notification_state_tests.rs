//! Tests for notification_state

use super::*;
use proptest::prelude::*;
use std::thread;

#[test]
fn test_info_notification() {
    let notif = Notification::new("Copied item", NotificationKind::Info);
    assert_eq!(notif.message, "Copied item");
    assert_eq!(notif.duration, Some(Duration::from_millis(1500)));
    assert_eq!(notif.colors.fg, theme::notification::INFO_FG);
    assert_eq!(notif.colors.bg, theme::notification::INFO_BG);
    assert!(!notif.is_expired());
}

#[test]
fn test_warning_notification() {
    let notif = Notification::new("1 file failed to load", NotificationKind::Warning);
    assert_eq!(notif.kind, NotificationKind::Warning);
    assert_eq!(notif.duration, Some(Duration::from_secs(8)));
    assert_eq!(notif.colors.bg, theme::notification::WARNING_BG);
}

#[test]
fn test_error_notification_is_permanent() {
    let notif = Notification::new("Clipboard unavailable", NotificationKind::Error);
    assert_eq!(notif.duration, None);
    assert_eq!(notif.colors.border, theme::notification::ERROR_BORDER);
    assert!(!notif.is_expired());
}

#[test]
fn test_notification_expiration() {
    let mut notif = Notification::new("Expiring", NotificationKind::Info);
    notif.duration = Some(Duration::from_millis(10));
    assert!(!notif.is_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(notif.is_expired());
}

#[test]
fn test_show_replaces_current() {
    let mut state = NotificationState::new();
    assert!(state.current().is_none());

    state.show("First");
    state.show_warning("Second");

    assert_eq!(state.current_message(), Some("Second"));
    assert_eq!(state.current().unwrap().kind, NotificationKind::Warning);
}

#[test]
fn test_clear_if_expired() {
    let mut state = NotificationState::new();
    state.show("Test");
    state.expire_after(Duration::from_millis(10));

    assert!(!state.clear_if_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(state.clear_if_expired());
    assert!(state.current().is_none());
}

#[test]
fn test_error_stays_until_dismissed() {
    let mut state = NotificationState::new();
    state.show_error("Critical");

    assert!(state.has_sticky());
    assert!(!state.clear_if_expired());

    state.dismiss();
    assert!(state.current().is_none());
    assert!(!state.has_sticky());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_only_latest_notification_is_visible(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
        let mut state = NotificationState::new();

        for msg in &messages {
            state.show(msg);
        }

        prop_assert_eq!(state.current_message(), messages.last().map(String::as_str));
    }
}
