use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::filter_menu_state::FilterRow;
use crate::app::App;

const PAGE_SIZE: usize = 10;

pub fn handle_filter_menu_key(app: &mut App, key: KeyEvent) {
    let rows = app.filter_rows();
    let row_count = rows.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.filter_menu.select_next(row_count),
        KeyCode::Char('k') | KeyCode::Up => app.filter_menu.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.filter_menu.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.filter_menu.select_last(row_count),
        KeyCode::PageDown => app.filter_menu.move_down(PAGE_SIZE, row_count),
        KeyCode::PageUp => app.filter_menu.move_up(PAGE_SIZE),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(row) = rows.get(app.filter_menu.cursor) {
                toggle_row(app, row);
            }
        }
        _ => {}
    }
}

fn toggle_row(app: &mut App, row: &FilterRow) {
    match row {
        FilterRow::HideProps => app.settings.toggle_hide_props(),
        FilterRow::Entry { dimension, key, .. } => {
            let _shown = app.settings.toggle(*dimension, key);

            #[cfg(debug_assertions)]
            log::debug!("Filter {:?}/{} shown={}", dimension, key, _shown);
        }
    }

    // The stash cursor may now point past the last visible row
    let stash_rows = app.stash_rows().len();
    app.stash_pane.clamp(stash_rows);
}
