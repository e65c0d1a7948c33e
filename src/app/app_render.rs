use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::filter::filter_render;
use crate::help::{help_line_render, help_popup_render};
use crate::notification::render_notification;
use crate::stash::stash_render;

impl App {
    /// Stash pane on the left, filter menu on the right, hint line underneath
    pub fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let panes = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(self.filter_menu_width),
        ])
        .split(rows[0]);

        stash_render::render_pane(self, frame, panes[0]);
        filter_render::render_menu(self, frame, panes[1]);
        help_line_render::render_line(self, frame, rows[1]);

        if self.help.visible {
            help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
