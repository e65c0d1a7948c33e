use std::path::PathBuf;

use crate::config::{ClipboardBackend, Config};
use crate::filter::{FilterMenuState, FilterRow, Settings, filter_rows, visible_items};
use crate::help::HelpPopupState;
use crate::input::{LoadingState, StashLoader, expand_inputs};
use crate::item::Item;
use crate::notification::NotificationState;
use crate::stash::{FileLoad, StashPaneState, StashRow, stash_rows};
use crate::stats::{Stats, aggregate_loads};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    StashPane,
    FilterMenu,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::StashPane => Focus::FilterMenu,
            Focus::FilterMenu => Focus::StashPane,
        }
    }
}

pub struct App {
    /// Paths as given on the command line; re-expanded on reload
    pub inputs: Vec<PathBuf>,
    pub loader: Option<StashLoader>,
    pub stashes: Vec<FileLoad>,
    pub stats: Stats,
    pub settings: Settings,
    pub focus: Focus,
    pub stash_pane: StashPaneState,
    pub filter_menu: FilterMenuState,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub filter_menu_width: u16,
    pub should_quit: bool,
}

impl App {
    /// Start the app and begin loading `inputs` in the background
    pub fn new(inputs: Vec<PathBuf>, config: &Config) -> Self {
        let loader = StashLoader::spawn(expand_inputs(&inputs));
        let mut app = Self::empty(config);
        app.inputs = inputs;
        app.loader = Some(loader);
        app
    }

    /// Start the app with stashes that are already loaded
    pub fn with_stashes(loads: Vec<FileLoad>, config: &Config) -> Self {
        let mut app = Self::empty(config);
        app.set_stashes(loads);
        app
    }

    fn empty(config: &Config) -> Self {
        Self {
            inputs: Vec::new(),
            loader: None,
            stashes: Vec::new(),
            stats: Stats::default(),
            settings: Settings::new(),
            focus: Focus::StashPane,
            stash_pane: StashPaneState::new(),
            filter_menu: FilterMenuState::new(),
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            filter_menu_width: config.layout.filter_menu_width,
            should_quit: false,
        }
    }

    /// Pick up a finished load batch, if there is one
    ///
    /// Returns true when new stashes were installed.
    pub fn poll_loader(&mut self) -> bool {
        let Some(loads) = self.loader.as_mut().and_then(StashLoader::poll) else {
            return false;
        };
        self.loader = None;
        self.set_stashes(loads);
        true
    }

    /// Replace the loaded stashes and recompute stats
    ///
    /// Filter settings and collapse flags survive so a reload keeps the view.
    pub fn set_stashes(&mut self, loads: Vec<FileLoad>) {
        let failed = loads.iter().filter(|load| load.error().is_some()).count();

        self.stats = aggregate_loads(&loads);
        self.stash_pane.reset(loads.len());
        self.stashes = loads;

        let stash_rows = self.stash_rows().len();
        self.stash_pane.clamp(stash_rows);
        let filter_rows = self.filter_rows().len();
        self.filter_menu.clamp(filter_rows);

        #[cfg(debug_assertions)]
        log::debug!(
            "Installed {} stashes ({} failed), {} items",
            self.stashes.len(),
            failed,
            self.stats.count
        );

        if failed > 0 {
            let noun = if failed == 1 { "file" } else { "files" };
            self.notification
                .show_warning(&format!("{} {} failed to load", failed, noun));
        }
    }

    /// Re-read every input from disk
    pub fn reload(&mut self) {
        if self.is_loading() {
            return;
        }
        if self.inputs.is_empty() {
            self.notification.show("Nothing to reload");
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("Reloading {} inputs", self.inputs.len());

        self.loader = Some(StashLoader::spawn(expand_inputs(&self.inputs)));
        self.notification.show("Reloading...");
    }

    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(StashLoader::is_loading)
    }

    /// `(done, total)` while a batch is in flight
    pub fn loading_progress(&self) -> Option<(usize, usize)> {
        match self.loader.as_ref()?.state() {
            LoadingState::Loading { done, total } => Some((done, total)),
            LoadingState::Complete => None,
        }
    }

    pub fn stash_rows(&self) -> Vec<StashRow> {
        stash_rows(&self.stashes, &self.stash_pane.collapsed, &self.settings)
    }

    pub fn filter_rows(&self) -> Vec<FilterRow> {
        filter_rows(&self.stats)
    }

    pub fn selected_row(&self) -> Option<StashRow> {
        self.stash_rows().get(self.stash_pane.cursor).copied()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        match self.selected_row()? {
            StashRow::Item { stash, item } => self.stashes.get(stash)?.items().get(item),
            StashRow::Header(_) => None,
        }
    }

    /// Items that pass the current filters, across all stashes
    pub fn visible_item_count(&self) -> usize {
        self.stashes
            .iter()
            .map(|load| visible_items(load.items(), &self.settings).count())
            .sum()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
