//! Merge discovered and caller-supplied paths into the final manifest document.

use std::collections::BTreeSet;

use tracing::debug;

use crate::asset_paths::{normalize_entry, to_root_relative};
use crate::models::{GenerationRequest, Manifest};

/// Build the manifest from the discovered asset set and the request options.
///
/// Additional paths are normalised before insertion, the entry is added unless the request
/// skips it, and the entry never appears twice: it is either reported in `entry` and removed
/// from `assets`, or `entry` is `None` and every path is treated alike.
pub fn assemble_manifest(mut asset_paths: BTreeSet<String>, request: &GenerationRequest) -> Manifest {
  for path in &request.additional_paths {
    match to_root_relative(path) {
      Some(normalized) => {
        asset_paths.insert(normalized);
      }
      None => debug!(path = %path, "ignoring empty additional path"),
    }
  }

  let entry_path = normalize_entry(&request.entry_html);
  if !request.skip_entry_html {
    asset_paths.insert(entry_path.clone());
  }

  let entry = (!request.skip_entry_html && asset_paths.contains(&entry_path)).then_some(entry_path);
  if let Some(entry) = &entry {
    asset_paths.remove(entry);
  }

  Manifest {
    entry,
    assets: asset_paths.into_iter().collect(),
  }
}
