use super::settings::FilterDimension;
use crate::scroll::ScrollState;
use crate::stats::Stats;

/// A row the filter menu cursor can land on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    HideProps,
    Entry {
        dimension: FilterDimension,
        key: String,
        count: usize,
    },
}

/// Selectable rows of the filter menu, in display order.
///
/// Rebuilt from the current stats on every use so the menu always matches
/// what is loaded.
pub fn filter_rows(stats: &Stats) -> Vec<FilterRow> {
    let mut rows = vec![FilterRow::HideProps];
    for dimension in FilterDimension::ALL {
        rows.extend(
            stats
                .table(dimension)
                .iter()
                .map(|(key, count)| FilterRow::Entry {
                    dimension,
                    key: key.to_string(),
                    count,
                }),
        );
    }
    rows
}

#[derive(Debug, Clone, Default)]
pub struct FilterMenuState {
    pub cursor: usize,
    pub scroll: ScrollState,
}

impl FilterMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, row_count: usize) {
        self.move_down(1, row_count);
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
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

    /// Keep the cursor on an existing row after the row set changed
    pub fn clamp(&mut self, row_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }
}
