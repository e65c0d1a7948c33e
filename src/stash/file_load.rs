use std::path::{Path, PathBuf};

use crate::error::StashError;
use crate::item::Item;

/// Outcome of loading one input file: its items, or why there are none
#[derive(Debug, Clone, PartialEq)]
pub struct FileLoad {
    pub path: PathBuf,
    pub result: Result<Vec<Item>, StashError>,
}

impl FileLoad {
    pub fn new(path: PathBuf, result: Result<Vec<Item>, StashError>) -> Self {
        Self { path, result }
    }

    /// Parsed items; empty for a failed load
    pub fn items(&self) -> &[Item] {
        match &self.result {
            Ok(items) => items,
            Err(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&StashError> {
        self.result.as_ref().err()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used as the stash owner in headers
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
