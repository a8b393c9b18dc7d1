//! Locates `.robot` suite files under the input root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::cli::output;
use crate::errors::ExportError;

/// Recursively scans `root` for `.robot` files.
///
/// The returned list is sorted so runs over an unchanged tree visit files in
/// the same order. A missing or non-directory root is fatal; an unreadable
/// entry inside the tree is reported and skipped.
pub fn discover_suite_files(root: &Path) -> Result<Vec<PathBuf>, ExportError> {
    if !root.is_dir() {
        return Err(ExportError::InputDirMissing(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                output::warn(&format!("skipping unreadable entry: {}", e));
                continue;
            }
        };
        if entry.file_type().is_file() && is_robot_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn is_robot_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "robot")
}
