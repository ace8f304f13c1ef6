//! Script finder
//!
//! Uses walkdir to enumerate `.py` and `.ipynb` files under a source root,
//! pruning every directory whose relative path contains the excluded-folder
//! marker.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::model::{ScanError, ScriptKind};
use crate::core::paths::make_relative;

/// Directories whose relative path contains this marker are skipped
pub const EXCLUDED_FOLDER_MARKER: &str = "_docs";

/// True when `entry` is a directory that must not be descended
fn is_excluded_dir(entry: &DirEntry, root: &Path) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    make_relative(entry.path(), root)
        .map(|relative| relative.contains(EXCLUDED_FOLDER_MARKER))
        .unwrap_or(false)
}

/// Find every script and notebook under `root`, in traversal order.
///
/// Fails only when the root itself cannot be traversed. A root that is not a
/// directory yields nothing. Unreadable entries deeper in the tree are logged
/// and skipped.
pub fn scan_scripts(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, root));

    let mut scripts = Vec::new();

    // The first item is the root; an error there means nothing can be listed.
    match walker.next() {
        Some(Ok(entry)) if !entry.file_type().is_dir() => {
            tracing::warn!("Source path {:?} is not a directory", entry.path());
            return Ok(scripts);
        }
        Some(Ok(_)) | None => {}
        Some(Err(source)) => {
            return Err(ScanError::Walk {
                path: root.to_path_buf(),
                source,
            })
        }
    }

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry while searching scripts: {}", err);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if ScriptKind::from_path(entry.path()).is_some() {
            scripts.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} scripts under {:?}", scripts.len(), root);
    Ok(scripts)
}
