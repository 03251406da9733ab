//! Build tool integrations translating a host's "build finished" signal into generation requests.
//!
//! The core never sees a host tool's object graph: an integration reduces the host event to a
//! [`BuildCompletion`] (output directory plus the files the host knows it emitted) and a
//! [`BuildAdapter`] turns that into an ordered list of candidate [`GenerationRequest`]s.
//! [`run_adapter`] tries them in order and stops at the first success. Failures are logged and
//! swallowed so manifest generation can never fail an otherwise successful application build.

mod emitted;
mod probing;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::asset_paths::{DEFAULT_ENTRY_HTML, emitted_asset_path};
use crate::builder::ManifestBuilder;
use crate::models::{GenerationRequest, Manifest};

pub use emitted::{EmittedAssetsAdapter, EmittingHost};
pub use probing::{NuxtMode, ProbingAdapter, ProbingHost};

/// Trait implemented by every host tool integration.
pub trait BuildAdapter {
  /// Short identifier of the host tool, used in log messages.
  fn name(&self) -> &str;

  /// Candidate requests for a completed build, most likely output directory first.
  ///
  /// Relative directories are resolved by `builder`, the same builder that later scans them, so
  /// emitted files are relativised against the directory that is actually generated.
  fn requests(&self, completion: &BuildCompletion, builder: &ManifestBuilder) -> Vec<GenerationRequest>;
}

/// Host-agnostic description of a finished build.
#[derive(Debug, Clone, Default)]
pub struct BuildCompletion {
  /// Whether the host reported a successful build.
  pub success: bool,
  /// Output directory reported by the host, when it exposes one.
  pub output_dir: Option<PathBuf>,
  /// Files the host emitted, absolute or relative to the output directory.
  pub emitted: Vec<PathBuf>,
}

impl BuildCompletion {
  /// A successful build with nothing reported yet.
  pub fn success() -> Self {
    Self {
      success: true,
      ..Self::default()
    }
  }

  /// A failed build; adapters never generate a manifest for it.
  pub fn failure() -> Self {
    Self::default()
  }

  /// Record the output directory reported by the host.
  pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.output_dir = Some(dir.into());
    self
  }

  /// Record files emitted by the host.
  pub fn with_emitted<I, P>(mut self, files: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
  {
    self.emitted.extend(files.into_iter().map(Into::into));
    self
  }
}

/// Options shared by every integration, as a user would pass them to a build plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterOptions {
  /// Output directory used when the host does not report one.
  pub out_dir: Option<PathBuf>,
  /// Entry document of the application.
  pub entry_html: String,
  /// Explicit skip-entry policy; `None` lets the host preset decide.
  pub skip_entry_html: Option<bool>,
  /// Alternative manifest location.
  pub manifest_output_path: Option<PathBuf>,
}

impl Default for AdapterOptions {
  fn default() -> Self {
    Self {
      out_dir: None,
      entry_html: DEFAULT_ENTRY_HTML.to_string(),
      skip_entry_html: None,
      manifest_output_path: None,
    }
  }
}

impl AdapterOptions {
  fn request(
    &self,
    builder: &ManifestBuilder,
    output_dir: PathBuf,
    server_rendered: bool,
    emitted: &[PathBuf],
  ) -> GenerationRequest {
    let resolved_dir = builder.resolve_dir(&output_dir);
    let additional_paths = emitted
      .iter()
      .filter_map(|file| emitted_asset_path(&resolved_dir, file))
      .collect();

    GenerationRequest {
      output_dir,
      entry_html: self.entry_html.clone(),
      additional_paths,
      skip_entry_html: self.skip_entry_html.unwrap_or(server_rendered),
      manifest_output_path: self.manifest_output_path.clone(),
    }
  }
}

/// Generate a manifest for a finished build through `adapter`.
///
/// Returns `None` for failed builds and when every candidate request fails; the latter is logged
/// as a warning rather than propagated.
pub fn run_adapter<A>(
  builder: &ManifestBuilder,
  adapter: &A,
  completion: &BuildCompletion,
) -> Option<Manifest>
where
  A: BuildAdapter + ?Sized,
{
  let name = adapter.name();
  if !completion.success {
    debug!(adapter = name, "build failed, not generating a manifest");
    return None;
  }

  let mut last_error = None;
  for request in adapter.requests(completion, builder) {
    match builder.generate(&request) {
      Ok(manifest) => return Some(manifest),
      Err(err) => {
        debug!(
          adapter = name,
          output_dir = %request.output_dir.display(),
          error = %err,
          "candidate output directory failed"
        );
        last_error = Some(err);
      }
    }
  }

  match last_error {
    Some(err) => warn!(adapter = name, error = %err, "could not generate despia/local.json"),
    None => warn!(adapter = name, "no output directory candidates to scan"),
  }
  None
}
