use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

const PAGE_SIZE: usize = 10;

/// Keys that work the same whatever pane has focus
///
/// While help is open it swallows every key except Ctrl+C.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if key.code == KeyCode::Char('c') && ctrl {
        app.should_quit = true;
        return true;
    }

    if app.help.visible {
        handle_help_key(app, key);
        return true;
    }

    match key.code {
        KeyCode::Char('q') if !ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.help.toggle();
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggle();
            true
        }
        KeyCode::Char('p') if !ctrl => {
            app.settings.toggle_hide_props();
            true
        }
        KeyCode::Char('r') if !ctrl => {
            app.reload();
            true
        }
        KeyCode::Esc if app.notification.current().is_some() => {
            app.notification.dismiss();
            true
        }
        _ => false,
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => app.help.close(),
        KeyCode::Char('j') | KeyCode::Down => app.help.scroll.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.help.scroll.scroll_up(1),
        KeyCode::PageDown => app.help.scroll.scroll_down(PAGE_SIZE),
        KeyCode::PageUp => app.help.scroll.scroll_up(PAGE_SIZE),
        KeyCode::Char('g') | KeyCode::Home => app.help.scroll.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.help.scroll.jump_to_bottom(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
