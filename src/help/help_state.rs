use crate::help::HELP_SECTIONS;
use crate::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.visible = true;
        }
    }

    /// Close and forget the scroll position
    pub fn close(&mut self) {
        self.visible = false;
        self.scroll.reset();
    }

    /// Number of lines the popup body renders
    pub fn content_height() -> usize {
        // entries, a title per section, and a blank line between sections
        let entries: usize = HELP_SECTIONS.iter().map(|s| s.entries.len()).sum();
        entries + HELP_SECTIONS.len() * 2 - 1
    }
}
