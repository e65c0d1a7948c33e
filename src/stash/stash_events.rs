use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::stash_pane_state::StashRow;
use crate::app::App;
use crate::clipboard::clipboard_events;

const PAGE_SIZE: usize = 10;

pub fn handle_stash_pane_key(app: &mut App, key: KeyEvent) {
    let row_count = app.stash_rows().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.stash_pane.move_down(1, row_count),
        KeyCode::Char('k') | KeyCode::Up => app.stash_pane.move_up(1),
        KeyCode::Char('g') | KeyCode::Home => app.stash_pane.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.stash_pane.select_last(row_count),
        KeyCode::PageDown => app.stash_pane.move_down(PAGE_SIZE, row_count),
        KeyCode::PageUp => app.stash_pane.move_up(PAGE_SIZE),
        KeyCode::Enter | KeyCode::Char(' ') => toggle_selected_stash(app),
        KeyCode::Char('c') => set_all_collapsed(app, true),
        KeyCode::Char('e') => set_all_collapsed(app, false),
        KeyCode::Char('y') => {
            clipboard_events::copy_selection(app);
        }
        _ => {}
    }
}

/// Collapse or expand the stash under the cursor, leaving the cursor on its header
fn toggle_selected_stash(app: &mut App) {
    let Some(row) = app.selected_row() else {
        return;
    };
    let stash = match row {
        StashRow::Header(stash) | StashRow::Item { stash, .. } => stash,
    };

    app.stash_pane.toggle_collapsed(stash);
    select_header(app, stash);
}

fn set_all_collapsed(app: &mut App, collapsed: bool) {
    let current = app.selected_row();
    app.stash_pane.set_all_collapsed(collapsed);

    match current {
        Some(StashRow::Header(stash) | StashRow::Item { stash, .. }) => select_header(app, stash),
        None => app.stash_pane.select_first(),
    }
}

fn select_header(app: &mut App, stash: usize) {
    if let Some(index) = app
        .stash_rows()
        .iter()
        .position(|row| *row == StashRow::Header(stash))
    {
        app.stash_pane.cursor = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClipboardBackend;
    use crate::test_utils::test_helpers::{key, test_app, test_loads};

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut app = test_app(test_loads());
        // shared.json header + 4 items + broken.json header
        assert_eq!(app.stash_rows().len(), 6);

        app.handle_key_event(key(KeyCode::Up));
        assert_eq!(app.stash_pane.cursor, 0);

        app.handle_key_event(key(KeyCode::Char('j')));
        assert_eq!(app.selected_row(), Some(StashRow::Item { stash: 0, item: 0 }));

        app.handle_key_event(key(KeyCode::PageDown));
        assert_eq!(app.stash_pane.cursor, 5);

        app.handle_key_event(key(KeyCode::Char('k')));
        assert_eq!(app.stash_pane.cursor, 4);

        app.handle_key_event(key(KeyCode::Char('g')));
        assert_eq!(app.stash_pane.cursor, 0);

        app.handle_key_event(key(KeyCode::End));
        assert_eq!(app.selected_row(), Some(StashRow::Header(1)));
    }

    #[test]
    fn test_enter_on_header_collapses_stash() {
        let mut app = test_app(test_loads());

        app.handle_key_event(key(KeyCode::Enter));

        assert!(app.stash_pane.is_collapsed(0));
        assert_eq!(
            app.stash_rows(),
            vec![StashRow::Header(0), StashRow::Header(1)]
        );
        assert_eq!(app.stash_pane.cursor, 0);

        app.handle_key_event(key(KeyCode::Char(' ')));
        assert!(!app.stash_pane.is_collapsed(0));
        assert_eq!(app.stash_rows().len(), 6);
    }

    #[test]
    fn test_enter_on_item_collapses_its_stash() {
        let mut app = test_app(test_loads());
        app.stash_pane.cursor = 3;

        app.handle_key_event(key(KeyCode::Enter));

        assert!(app.stash_pane.is_collapsed(0));
        assert_eq!(app.selected_row(), Some(StashRow::Header(0)));
    }

    #[test]
    fn test_collapse_and_expand_all() {
        let mut app = test_app(test_loads());
        app.stash_pane.cursor = 5;

        app.handle_key_event(key(KeyCode::Char('c')));
        assert_eq!(app.stash_rows().len(), 2);
        assert_eq!(app.selected_row(), Some(StashRow::Header(1)));

        app.handle_key_event(key(KeyCode::Char('e')));
        assert_eq!(app.stash_rows().len(), 6);
        assert_eq!(app.selected_row(), Some(StashRow::Header(1)));
    }

    #[test]
    fn test_y_copies_selected_item() {
        let mut app = test_app(test_loads());
        app.clipboard_backend = ClipboardBackend::Osc52;
        app.stash_pane.cursor = 1;

        app.handle_key_event(key(KeyCode::Char('y')));

        assert_eq!(app.notification.current_message(), Some("Copied item!"));
    }

    #[test]
    fn test_keys_on_empty_pane_are_harmless() {
        let mut app = test_app(Vec::new());

        for code in [KeyCode::Char('j'), KeyCode::Char('G'), KeyCode::Enter, KeyCode::Char('c')] {
            app.handle_key_event(key(code));
        }

        assert_eq!(app.stash_pane.cursor, 0);
    }
}
