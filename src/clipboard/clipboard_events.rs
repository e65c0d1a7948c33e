use crate::app::App;
use crate::stash::StashRow;

use super::backend::copy_to_clipboard;

/// Copy whatever the stash cursor is on as pretty JSON.
///
/// An item row copies that item; a header row copies the stash's items as an
/// array. Returns false when there is nothing to copy.
pub fn copy_selection(app: &mut App) -> bool {
    let Some((text, label)) = selection_json(app) else {
        return false;
    };

    match copy_to_clipboard(&text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show(label);
            true
        }
        Err(err) => {
            app.notification
                .show_warning(&format!("Copy failed: {}", err));
            false
        }
    }
}

/// The JSON to copy for the current selection and the confirmation to show
pub fn selection_json(app: &App) -> Option<(String, &'static str)> {
    let json = match app.selected_row()? {
        StashRow::Item { stash, item } => {
            let item = app.stashes.get(stash)?.items().get(item)?;
            (serde_json::to_string_pretty(item).ok()?, "Copied item!")
        }
        StashRow::Header(stash) => {
            let load = app.stashes.get(stash)?;
            if load.error().is_some() {
                return None;
            }
            (
                serde_json::to_string_pretty(load.items()).ok()?,
                "Copied stash!",
            )
        }
    };
    Some(json)
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
