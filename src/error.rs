//! Fatal errors surfaced by manifest generation.
//!
//! Unreadable subtrees during discovery are deliberately absent here: they are recorded as
//! [`crate::models::SkippedSubtree`] diagnostics and never abort a generation.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a manifest generation or load.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// The resolved output directory does not exist.
  #[error("Output directory \"{}\" does not exist.", .path.display())]
  DirectoryNotFound {
    /// Absolute path that was checked.
    path: PathBuf,
  },

  /// The manifest file or one of its parent directories could not be written.
  #[error("failed to write {}: {source}", .path.display())]
  WriteFailure {
    /// Path being created or written.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },

  /// The manifest could not be serialised.
  #[error("failed to serialise manifest: {0}")]
  Serialize(#[from] serde_json::Error),

  /// An existing manifest could not be read.
  #[error("manifest not found at {}: {source}", .path.display())]
  Read {
    /// Manifest path.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },

  /// An existing manifest is not valid JSON of the expected shape.
  #[error("failed to parse manifest {}: {source}", .path.display())]
  Parse {
    /// Manifest path.
    path: PathBuf,
    /// Underlying parse error.
    #[source]
    source: serde_json::Error,
  },
}

/// Result alias used across the crate.
pub type ManifestResult<T> = Result<T, ManifestError>;
