//! Data structures exchanged between callers and the manifest builder.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::asset_paths::{DEFAULT_ENTRY_HTML, DEFAULT_OUTPUT_DIR};

/// Input contract for a single manifest generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
  /// Root directory to scan, relative to the builder's working directory unless absolute.
  pub output_dir: PathBuf,
  /// Entry document, normalised to a root-relative path before use.
  pub entry_html: String,
  /// Paths already known to the caller, merged without rescanning the disk.
  pub additional_paths: Vec<String>,
  /// Omit the entry document from the cacheable asset set (server-rendered entries).
  pub skip_entry_html: bool,
  /// Override for the manifest write location.
  pub manifest_output_path: Option<PathBuf>,
}

impl Default for GenerationRequest {
  fn default() -> Self {
    Self {
      output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
      entry_html: DEFAULT_ENTRY_HTML.to_string(),
      additional_paths: Vec::new(),
      skip_entry_html: false,
      manifest_output_path: None,
    }
  }
}

impl GenerationRequest {
  /// Request scanning `output_dir` with every other option at its default.
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self {
      output_dir: output_dir.into(),
      ..Self::default()
    }
  }

  /// Replace the entry document.
  pub fn with_entry_html(mut self, entry_html: impl Into<String>) -> Self {
    self.entry_html = entry_html.into();
    self
  }

  /// Append caller-supplied asset paths.
  pub fn with_additional_paths<I, S>(mut self, paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.additional_paths.extend(paths.into_iter().map(Into::into));
    self
  }

  /// Toggle the server-rendering skip policy for the entry document.
  pub fn with_skip_entry_html(mut self, skip: bool) -> Self {
    self.skip_entry_html = skip;
    self
  }

  /// Write the manifest to `path` instead of `<output_dir>/despia/local.json`.
  pub fn with_manifest_output_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.manifest_output_path = Some(path.into());
    self
  }
}

/// The manifest document consumed by the offline runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manifest {
  /// Root-relative entry document, or `None` when the entry is server rendered.
  pub entry: Option<String>,
  /// Sorted root-relative asset paths, never containing `entry`.
  pub assets: Vec<String>,
}

/// A subtree the discoverer could not read and left out of the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSubtree {
  /// Directory that was skipped.
  pub path: PathBuf,
  /// Human readable cause, for diagnostics only.
  pub reason: String,
}

/// Output of a filesystem walk over an output directory.
#[derive(Debug, Default)]
pub struct DiscoveredAssets {
  /// Root-relative paths of every regular file found.
  pub paths: BTreeSet<String>,
  /// Subtrees excluded because they could not be listed.
  pub skipped: Vec<SkippedSubtree>,
}
