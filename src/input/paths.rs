use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions picked up when a directory is given as input
const STASH_EXTENSIONS: &[&str] = &["json", "txt"];

/// Expand command-line inputs into the list of files to load.
///
/// Directories expand to their `.json` and `.txt` files (not recursive, sorted
/// by name). Anything else is passed through untouched, so a missing path still
/// becomes a per-file error later.
pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    inputs
        .iter()
        .flat_map(|input| {
            if input.is_dir() {
                stash_files_in(input)
            } else {
                vec![input.clone()]
            }
        })
        .collect()
}

fn stash_files_in(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(_err) => {
                #[cfg(debug_assertions)]
                log::error!("Skipping unreadable entry in {:?}: {}", dir, _err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_stash_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

fn has_stash_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            STASH_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
