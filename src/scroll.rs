use std::ops::Range;

/// Vertical scroll position of a pane
///
/// Offsets are line indices into the pane's content. Renderers draw only
/// [`ScrollState::visible_range`], so content length is not bounded by the
/// `u16` scroll offset ratatui's `Paragraph` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.max_offset = content_lines.saturating_sub(viewport_height as usize);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Scroll the minimum amount needed to bring lines `first..=last` into view.
    ///
    /// When the span is taller than the viewport its first line wins.
    pub fn ensure_visible(&mut self, first: usize, last: usize) {
        if self.viewport_height == 0 {
            return;
        }

        let span = self.viewport_height as usize - 1;
        let bottom = self.offset.saturating_add(span);
        if last > bottom {
            self.offset = last.saturating_sub(span);
        }
        if first < self.offset {
            self.offset = first;
        }
        self.offset = self.offset.min(self.max_offset);
    }

    /// Indices of the content lines that fit in the viewport
    pub fn visible_range(&self, content_lines: usize) -> Range<usize> {
        let start = self.offset.min(content_lines);
        let end = start
            .saturating_add(self.viewport_height as usize)
            .min(content_lines);
        start..end
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
