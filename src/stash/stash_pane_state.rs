use super::file_load::FileLoad;
use crate::filter::{Settings, visible_items};
use crate::scroll::ScrollState;

/// A row the stash pane cursor can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashRow {
    Header(usize),
    Item { stash: usize, item: usize },
}

/// Selectable rows of the stash pane, in display order.
///
/// Collapsed stashes contribute only their header. Hidden items are skipped.
pub fn stash_rows(loads: &[FileLoad], collapsed: &[bool], settings: &Settings) -> Vec<StashRow> {
    let mut rows = Vec::new();
    for (stash, load) in loads.iter().enumerate() {
        rows.push(StashRow::Header(stash));
        if collapsed.get(stash).copied().unwrap_or(false) {
            continue;
        }
        rows.extend(
            visible_items(load.items(), settings).map(|(item, _)| StashRow::Item { stash, item }),
        );
    }
    rows
}

#[derive(Debug, Clone, Default)]
pub struct StashPaneState {
    pub collapsed: Vec<bool>,
    pub cursor: usize,
    pub scroll: ScrollState,
}

impl StashPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize for a new set of loads, keeping collapse flags of surviving stashes
    pub fn reset(&mut self, stash_count: usize) {
        self.collapsed.resize(stash_count, false);
    }

    pub fn is_collapsed(&self, stash: usize) -> bool {
        self.collapsed.get(stash).copied().unwrap_or(false)
    }

    pub fn toggle_collapsed(&mut self, stash: usize) {
        if let Some(flag) = self.collapsed.get_mut(stash) {
            *flag = !*flag;
        }
    }

    pub fn set_all_collapsed(&mut self, collapsed: bool) {
        self.collapsed.iter_mut().for_each(|flag| *flag = collapsed);
    }

    pub fn move_down(&mut self, rows: usize, row_count: usize) {
        self.cursor = (self.cursor + rows).min(row_count.saturating_sub(1));
    }

    pub fn move_up(&mut self, rows: usize) {
        self.cursor = self.cursor.saturating_sub(rows);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self, row_count: usize) {
        self.cursor = row_count.saturating_sub(1);
    }

    pub fn clamp(&mut self, row_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterDimension;
    use crate::test_utils::test_helpers::test_loads;

    #[test]
    fn test_rows_list_headers_and_items() {
        let loads = test_loads();
        let rows = stash_rows(&loads, &[false, false], &Settings::new());

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], StashRow::Header(0));
        assert_eq!(rows[1], StashRow::Item { stash: 0, item: 0 });
        assert_eq!(rows[4], StashRow::Item { stash: 0, item: 3 });
        assert_eq!(rows[5], StashRow::Header(1));
    }

    #[test]
    fn test_collapsed_stash_shows_only_header() {
        let loads = test_loads();
        let rows = stash_rows(&loads, &[true, false], &Settings::new());

        assert_eq!(rows, vec![StashRow::Header(0), StashRow::Header(1)]);
    }

    #[test]
    fn test_hidden_items_are_skipped() {
        let loads = test_loads();
        let mut settings = Settings::new();
        settings.set_shown(FilterDimension::Quality, "Unique", false);

        let rows = stash_rows(&loads, &[], &settings);

        assert!(!rows.contains(&StashRow::Item { stash: 0, item: 0 }));
        assert!(rows.contains(&StashRow::Item { stash: 0, item: 1 }));
    }

    #[test]
    fn test_reset_keeps_existing_flags() {
        let mut pane = StashPaneState::new();
        pane.reset(2);
        pane.toggle_collapsed(1);

        pane.reset(3);
        assert_eq!(pane.collapsed, vec![false, true, false]);

        pane.reset(1);
        assert_eq!(pane.collapsed, vec![false]);
    }

    #[test]
    fn test_toggle_and_collapse_all() {
        let mut pane = StashPaneState::new();
        pane.reset(3);

        pane.toggle_collapsed(0);
        assert!(pane.is_collapsed(0));
        assert!(!pane.is_collapsed(5));

        pane.set_all_collapsed(true);
        assert_eq!(pane.collapsed, vec![true, true, true]);
        pane.set_all_collapsed(false);
        assert_eq!(pane.collapsed, vec![false, false, false]);
    }

    #[test]
    fn test_cursor_movement() {
        let mut pane = StashPaneState::new();
        pane.move_down(3, 5);
        assert_eq!(pane.cursor, 3);
        pane.move_down(10, 5);
        assert_eq!(pane.cursor, 4);
        pane.move_up(2);
        assert_eq!(pane.cursor, 2);
        pane.clamp(2);
        assert_eq!(pane.cursor, 1);
        pane.select_first();
        assert_eq!(pane.cursor, 0);
        pane.select_last(0);
        assert_eq!(pane.cursor, 0);
    }
}
