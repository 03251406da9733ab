//! Manifest build orchestrator: resolve directories, discover assets, merge, and write.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::asset_paths::{MANIFEST_DIR_NAME, MANIFEST_FILE_NAME, relative_asset_path};
use crate::error::{ManifestError, ManifestResult};
use crate::manifest::{assemble_manifest, collect_assets, write_manifest};
use crate::models::{GenerationRequest, Manifest};

/// Generate a manifest relative to the process working directory.
pub fn generate_manifest(request: &GenerationRequest) -> ManifestResult<Manifest> {
  ManifestBuilder::default().generate(request)
}

/// High-level helper resolving request paths against a working directory and producing manifests.
///
/// The builder holds no state between calls; every [`ManifestBuilder::generate`] allocates its own
/// asset set, so one builder can serve several output directories.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
  working_dir: PathBuf,
}

impl Default for ManifestBuilder {
  fn default() -> Self {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Self::new(working_dir)
  }
}

impl ManifestBuilder {
  /// Create a builder resolving relative request paths against `working_dir`.
  pub fn new(working_dir: impl Into<PathBuf>) -> Self {
    Self {
      working_dir: working_dir.into(),
    }
  }

  /// Directory relative request paths are resolved against.
  pub fn working_dir(&self) -> &Path {
    &self.working_dir
  }

  /// Absolute, lexically cleaned form of `dir` relative to the working directory.
  pub fn resolve_dir(&self, dir: &Path) -> PathBuf {
    absolutize(&self.working_dir, dir)
  }

  /// Absolute location of the directory the request asks to scan.
  pub fn resolve_output_dir(&self, request: &GenerationRequest) -> PathBuf {
    self.resolve_dir(&request.output_dir)
  }

  /// Absolute location the manifest will be written to for `request`.
  pub fn resolve_manifest_path(&self, request: &GenerationRequest) -> PathBuf {
    match &request.manifest_output_path {
      Some(custom) => absolutize(&self.working_dir, custom),
      None => self
        .resolve_output_dir(request)
        .join(MANIFEST_DIR_NAME)
        .join(MANIFEST_FILE_NAME),
    }
  }

  /// Scan the output directory, merge caller paths, and write the manifest.
  ///
  /// Fails with [`ManifestError::DirectoryNotFound`] before touching the disk when the output
  /// directory is missing, and with [`ManifestError::WriteFailure`] when the manifest cannot be
  /// written. Running twice over an unchanged tree produces byte-identical files.
  pub fn generate(&self, request: &GenerationRequest) -> ManifestResult<Manifest> {
    let output_dir = self.resolve_output_dir(request);
    if !output_dir.is_dir() {
      return Err(ManifestError::DirectoryNotFound { path: output_dir });
    }

    let manifest_path = self.resolve_manifest_path(request);

    let mut discovered = collect_assets(&output_dir, MANIFEST_DIR_NAME);
    if !discovered.skipped.is_empty() {
      debug!(
        count = discovered.skipped.len(),
        "some subtrees could not be read and were left out"
      );
    }

    // A custom manifest written inside the scanned tree must not list itself on the next run.
    if let Some(own_path) = relative_asset_path(&output_dir, &manifest_path) {
      discovered.paths.remove(&own_path);
    }

    let manifest = assemble_manifest(discovered.paths, request);
    write_manifest(&manifest_path, &manifest)?;

    info!(
      manifest = %manifest_path.display(),
      assets = manifest.assets.len(),
      entry = manifest.entry.as_deref().unwrap_or("none"),
      "generated offline manifest"
    );

    Ok(manifest)
  }
}

/// Join `path` onto `base` and drop `.`/`..` segments lexically, without touching the disk.
fn absolutize(base: &Path, path: &Path) -> PathBuf {
  let joined = base.join(path);
  let mut cleaned = PathBuf::new();
  for component in joined.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        if !cleaned.pop() {
          cleaned.push(component);
        }
      }
      other => cleaned.push(other),
    }
  }
  cleaned
}
