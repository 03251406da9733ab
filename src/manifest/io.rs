//! Reading and writing manifest documents on disk.

use std::fs;
use std::path::Path;

use crate::error::{ManifestError, ManifestResult};
use crate::models::Manifest;

/// Serialise a manifest as two-space indented JSON.
pub fn render_manifest(manifest: &Manifest) -> ManifestResult<String> {
  Ok(serde_json::to_string_pretty(manifest)?)
}

/// Write `manifest` to `path`, creating missing parent directories and replacing prior content.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> ManifestResult<()> {
  let json = render_manifest(manifest)?;

  if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
    fs::create_dir_all(parent).map_err(|source| ManifestError::WriteFailure {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  fs::write(path, json).map_err(|source| ManifestError::WriteFailure {
    path: path.to_path_buf(),
    source,
  })
}

/// Load a manifest previously written by [`write_manifest`].
pub fn load_manifest(path: &Path) -> ManifestResult<Manifest> {
  let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
    path: path.to_path_buf(),
    source,
  })
}
