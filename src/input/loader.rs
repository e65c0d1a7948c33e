//! Stash Loader Module
//!
//! Loads every input file on its own background thread so the UI never blocks
//! on disk reads. Results come back over a channel and are handed out only once
//! every file has settled, in the order the files were given.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use crate::error::StashError;
use crate::item::{Item, parse_stash};
use crate::stash::FileLoad;

/// Represents the current state of a batch load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Loading { done: usize, total: usize },
    Complete,
}

/// Manages one batch of background file loads
pub struct StashLoader {
    paths: Vec<PathBuf>,
    slots: Vec<Option<FileLoad>>,
    state: LoadingState,
    rx: Option<Receiver<(usize, FileLoad)>>,
}

impl StashLoader {
    /// Spawn one background thread per path
    pub fn spawn(paths: Vec<PathBuf>) -> Self {
        let (tx, rx) = channel();

        for (index, path) in paths.iter().enumerate() {
            let tx = tx.clone();
            let path = path.clone();
            std::thread::spawn(move || {
                let result = load_file_sync(&path);
                let _ = tx.send((index, FileLoad::new(path, result)));
            });
        }

        #[cfg(debug_assertions)]
        log::debug!("Spawned {} stash loader threads", paths.len());

        Self {
            slots: vec![None; paths.len()],
            state: LoadingState::Loading {
                done: 0,
                total: paths.len(),
            },
            paths,
            rx: Some(rx),
        }
    }

    /// Poll for batch completion (non-blocking)
    ///
    /// Returns `None` while any file is still loading. Once every file has
    /// settled, returns all loads in input order exactly once.
    pub fn poll(&mut self) -> Option<Vec<FileLoad>> {
        let rx = self.rx.take()?;

        let disconnected = loop {
            match rx.try_recv() {
                Ok((index, load)) => self.store(index, load),
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };

        if disconnected {
            self.fill_missing();
        }

        if self.is_loading() {
            self.rx = Some(rx);
            return None;
        }
        Some(self.slots.iter_mut().filter_map(Option::take).collect())
    }

    /// Block until every file has settled
    pub fn wait(mut self) -> Vec<FileLoad> {
        if let Some(rx) = self.rx.take() {
            while let Ok((index, load)) = rx.recv() {
                self.store(index, load);
            }
        }
        self.fill_missing();
        self.slots.into_iter().flatten().collect()
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading { .. })
    }

    fn store(&mut self, index: usize, load: FileLoad) {
        #[cfg(debug_assertions)]
        {
            match load.error() {
                Some(err) => log::error!("Failed to load {:?}: {}", load.path(), err),
                None => log::debug!("Loaded {:?}: {} items", load.path(), load.items().len()),
            }
        }

        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(load);
        }
        self.update_state();
    }

    /// A worker that died without reporting still gets a record
    fn fill_missing(&mut self) {
        for (slot, path) in self.slots.iter_mut().zip(&self.paths) {
            if slot.is_none() {
                *slot = Some(FileLoad::new(
                    path.clone(),
                    Err(StashError::Io("Stash loader thread disconnected".to_string())),
                ));
            }
        }
        self.update_state();
    }

    fn update_state(&mut self) {
        let done = self.slots.iter().filter(|slot| slot.is_some()).count();
        self.state = if done == self.slots.len() {
            LoadingState::Complete
        } else {
            LoadingState::Loading {
                done,
                total: self.slots.len(),
            }
        };
    }
}

/// Synchronous file loading (runs in background thread)
fn load_file_sync(path: &Path) -> Result<Vec<Item>, StashError> {
    let contents = std::fs::read_to_string(path)?;
    parse_stash(&contents)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
