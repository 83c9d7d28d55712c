// src/discovery.rs

//! Locating per-site log databases under the sites root.

use crate::db::PruneError;
use crate::pruner_log;
use log::Level;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Recursively visit every file under `root` whose base name is exactly
/// `file_name`, calling `on_match` as each one is reached.
///
/// Entries are visited in lexical order so runs are reproducible. Symlinked
/// directories are not followed; a symlink named `file_name` is handed over
/// like a regular file, while FIFOs, sockets and devices are skipped. Any
/// unreadable directory, the root included, aborts the walk with
/// [`PruneError::Traversal`]; matches reached before it have already been
/// handed to `on_match`. Returns the number of matches.
pub fn find_site_databases<F>(root: &Path, file_name: &str, mut on_match: F) -> Result<usize, PruneError>
where
    F: FnMut(PathBuf),
{
    let mut found = 0;
    walk(root, file_name, &mut |path: PathBuf| {
        found += 1;
        on_match(path);
    })?;
    pruner_log!(Level::Debug, "discovery", "{:?} → {} site database(s)", root, found);
    Ok(found)
}

fn walk(dir: &Path, file_name: &str, on_match: &mut dyn FnMut(PathBuf)) -> Result<(), PruneError> {
    let traversal = |source| PruneError::Traversal { path: dir.to_path_buf(), source };

    let mut entries = fs::read_dir(dir)
        .map_err(traversal)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(traversal)?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| PruneError::Traversal {
            path: path.clone(),
            source,
        })?;
        if file_type.is_dir() {
            walk(&path, file_name, on_match)?;
        } else if (file_type.is_file() || file_type.is_symlink()) && entry.file_name() == file_name {
            on_match(path);
        }
    }
    Ok(())
}
