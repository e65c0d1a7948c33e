//! Tests for clipboard_events

use super::*;
use crate::config::ClipboardBackend;
use crate::test_utils::test_helpers::test_app;
use crate::test_utils::test_helpers::test_loads;
use serde_json::Value;

#[test]
fn test_item_row_copies_item_json() {
    let mut app = test_app(test_loads());
    app.stash_pane.cursor = 1;

    let (text, label) = selection_json(&app).expect("item selected");

    assert_eq!(label, "Copied item!");
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["name"], "Harlequin Crest");
    assert_eq!(value["type"], "Shako");
    assert_eq!(value["quality"], "Unique");
    assert!(text.contains('\n'), "copied JSON is pretty printed");
}

#[test]
fn test_header_row_copies_stash_array() {
    let app = test_app(test_loads());

    let (text, label) = selection_json(&app).expect("header selected");

    assert_eq!(label, "Copied stash!");
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(4));
}

#[test]
fn test_failed_stash_header_copies_nothing() {
    let mut app = test_app(test_loads());
    // shared.json header + 4 items, then broken.json header
    app.stash_pane.cursor = 5;

    assert!(selection_json(&app).is_none());
    assert!(!copy_selection(&mut app));
}

#[test]
fn test_empty_app_copies_nothing() {
    let mut app = test_app(Vec::new());
    assert!(!copy_selection(&mut app));
    assert!(app.notification.current().is_none());
}

#[test]
fn test_copy_shows_confirmation() {
    let mut app = test_app(test_loads());
    app.clipboard_backend = ClipboardBackend::Osc52;
    app.stash_pane.cursor = 2;

    assert!(copy_selection(&mut app));
    assert_eq!(app.notification.current_message(), Some("Copied item!"));
}
