use std::path::{Component, Path};

use super::to_root_relative;

/// Express a file reported by a build tool as a root-relative asset path.
///
/// Relative paths are taken as already relative to the output directory. Absolute paths are
/// relativised against `output_dir`; when the file lives outside of it only the file name is
/// kept, mirroring how a host tool would flatten the file into the bundle root.
pub fn emitted_asset_path(output_dir: &Path, emitted: &Path) -> Option<String> {
    if !emitted.is_absolute() {
        return to_root_relative(&emitted.to_string_lossy());
    }

    match emitted.strip_prefix(output_dir) {
        Ok(relative) => to_root_relative(&join_components(relative)),
        Err(_) => emitted
            .file_name()
            .and_then(|name| to_root_relative(&name.to_string_lossy())),
    }
}

/// Root-relative path of `path` inside `root`, if it lies beneath it.
pub fn relative_asset_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    to_root_relative(&join_components(relative))
}

fn join_components(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
