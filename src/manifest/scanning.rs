//! Directory scanning for every file a build wrote to its output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::{DiscoveredAssets, SkippedSubtree};

/// Walk `root` collecting root-relative paths for every regular file beneath it.
///
/// Entries named `reserved_dir_name` are never descended into nor listed, at any depth. Unreadable
/// directories are recorded in [`DiscoveredAssets::skipped`] and otherwise ignored, so a single
/// bad subtree never aborts discovery. Symlinks are followed unless they lead back into a
/// directory currently being walked.
pub fn collect_assets(root: &Path, reserved_dir_name: &str) -> DiscoveredAssets {
    let mut discovered = DiscoveredAssets::default();
    let mut ancestors = Vec::new();
    if let Ok(canonical) = fs::canonicalize(root) {
        ancestors.push(canonical);
    }

    collect_assets_recursively(
        root,
        Path::new(""),
        reserved_dir_name,
        &mut ancestors,
        &mut discovered,
    );
    discovered
}

fn collect_assets_recursively(
    dir: &Path,
    relative_root: &Path,
    reserved_dir_name: &str,
    ancestors: &mut Vec<PathBuf>,
    discovered: &mut DiscoveredAssets,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            skip(discovered, dir, err.to_string());
            return;
        }
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        if file_name.to_string_lossy() == reserved_dir_name {
            continue;
        }

        let path = entry.path();
        let next_relative = relative_root.join(&file_name);

        // Follows symlinks; dangling links fail here and are dropped.
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };

        if metadata.is_dir() {
            let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if ancestors.contains(&canonical) {
                skip(discovered, &path, "symlink cycle".to_string());
                continue;
            }

            ancestors.push(canonical);
            collect_assets_recursively(
                &path,
                &next_relative,
                reserved_dir_name,
                ancestors,
                discovered,
            );
            ancestors.pop();
        } else if metadata.is_file() {
            let rel_path_str = next_relative.to_string_lossy().replace('\\', "/");
            discovered.paths.insert(format!("/{rel_path_str}"));
        }
    }
}

fn skip(discovered: &mut DiscoveredAssets, path: &Path, reason: String) {
    debug!(path = %path.display(), %reason, "skipping unreadable subtree");
    discovered.skipped.push(SkippedSubtree {
        path: path.to_path_buf(),
        reason,
    });
}
