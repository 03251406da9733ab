//! Integrations for hosts that report the files they emitted.

use std::path::{Path, PathBuf};

use crate::asset_paths::DEFAULT_OUTPUT_DIR;
use crate::builder::ManifestBuilder;
use crate::models::GenerationRequest;

use super::{AdapterOptions, BuildAdapter, BuildCompletion};

/// Host tools whose completion hook exposes the emitted bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmittingHost {
  /// Vite `writeBundle`.
  Vite,
  /// Rollup `writeBundle`.
  Rollup,
  /// webpack `afterEmit`.
  Webpack,
  /// Next.js through its webpack configuration.
  Next,
  /// esbuild `onEnd`.
  Esbuild,
  /// Parcel `bundleEnd`.
  Parcel,
  /// Astro `astro:build:done`.
  Astro,
}

impl EmittingHost {
  /// Identifier used in logs.
  pub fn name(self) -> &'static str {
    match self {
      Self::Vite => "vite",
      Self::Rollup => "rollup",
      Self::Webpack => "webpack",
      Self::Next => "next",
      Self::Esbuild => "esbuild",
      Self::Parcel => "parcel",
      Self::Astro => "astro",
    }
  }

  /// Output directory assumed when neither the host nor the user names one.
  pub fn default_out_dir(self) -> &'static str {
    match self {
      Self::Next => ".next",
      _ => DEFAULT_OUTPUT_DIR,
    }
  }

  /// Whether the entry document is server rendered for builds written to `output_dir`.
  ///
  /// Only Next.js server builds (anything but a static `out` export) render the entry per request.
  pub fn server_rendered(self, output_dir: &Path) -> bool {
    self == Self::Next && output_dir.file_name().is_none_or(|name| name != "out")
  }
}

/// Adapter passing a host's emitted files to the core as additional paths.
#[derive(Debug, Clone)]
pub struct EmittedAssetsAdapter {
  host: EmittingHost,
  options: AdapterOptions,
}

impl EmittedAssetsAdapter {
  /// Create an adapter for `host` configured with `options`.
  pub fn new(host: EmittingHost, options: AdapterOptions) -> Self {
    Self { host, options }
  }

  fn output_dir(&self, completion: &BuildCompletion) -> PathBuf {
    completion
      .output_dir
      .clone()
      .or_else(|| self.options.out_dir.clone())
      .unwrap_or_else(|| PathBuf::from(self.host.default_out_dir()))
  }
}

impl BuildAdapter for EmittedAssetsAdapter {
  fn name(&self) -> &str {
    self.host.name()
  }

  fn requests(&self, completion: &BuildCompletion, builder: &ManifestBuilder) -> Vec<GenerationRequest> {
    let output_dir = self.output_dir(completion);
    let server_rendered = self.host.server_rendered(&output_dir);
    vec![self.options.request(builder, output_dir, server_rendered, &completion.emitted)]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  use crate::adapters::run_adapter;

  fn builder() -> ManifestBuilder {
    ManifestBuilder::new(std::env::temp_dir().join("app"))
  }

  #[test]
  fn host_output_dir_wins_over_options() {
    let adapter = EmittedAssetsAdapter::new(EmittingHost::Vite, AdapterOptions {
      out_dir: Some("configured".into()),
      ..AdapterOptions::default()
    });

    let requests = adapter.requests(&BuildCompletion::success().with_output_dir("reported"), &builder());
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].output_dir, PathBuf::from("reported"));

    let requests = adapter.requests(&BuildCompletion::success(), &builder());
    assert_eq!(requests[0].output_dir, PathBuf::from("configured"));
  }

  #[test]
  fn falls_back_to_host_default_dir() {
    let vite = EmittedAssetsAdapter::new(EmittingHost::Vite, AdapterOptions::default());
    let next = EmittedAssetsAdapter::new(EmittingHost::Next, AdapterOptions::default());

    assert_eq!(vite.requests(&BuildCompletion::success(), &builder())[0].output_dir, PathBuf::from("dist"));
    assert_eq!(next.requests(&BuildCompletion::success(), &builder())[0].output_dir, PathBuf::from(".next"));
  }

  #[test]
  fn next_server_builds_skip_the_entry_unless_overridden() {
    let next = EmittedAssetsAdapter::new(EmittingHost::Next, AdapterOptions::default());
    assert!(next.requests(&BuildCompletion::success(), &builder())[0].skip_entry_html);
    assert!(!next.requests(&BuildCompletion::success().with_output_dir("out"), &builder())[0].skip_entry_html);

    let forced = EmittedAssetsAdapter::new(EmittingHost::Next, AdapterOptions {
      skip_entry_html: Some(false),
      ..AdapterOptions::default()
    });
    assert!(!forced.requests(&BuildCompletion::success(), &builder())[0].skip_entry_html);
  }

  #[test]
  fn emitted_files_become_root_relative_paths() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dist");
    let adapter = EmittedAssetsAdapter::new(EmittingHost::Esbuild, AdapterOptions::default());

    let completion = BuildCompletion::success()
      .with_output_dir(&out)
      .with_emitted([out.join("assets/app.js"), PathBuf::from("chunks\\vendor.js")])
      .with_emitted([dir.path().join("outside/worker.js")]);
    let requests = adapter.requests(&completion, &builder());

    assert_eq!(requests[0].additional_paths, vec![
      "/assets/app.js".to_string(),
      "/chunks/vendor.js".to_string(),
      "/worker.js".to_string(),
    ]);
  }

  #[test]
  fn in_memory_chunks_are_listed_alongside_disk_files() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dist");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("index.html"), "<html></html>").unwrap();
    fs::write(out.join("app.js"), "").unwrap();

    let adapter = EmittedAssetsAdapter::new(EmittingHost::Rollup, AdapterOptions::default());
    let completion = BuildCompletion::success()
      .with_output_dir(&out)
      .with_emitted(["app.js", "pending-chunk.js"]);

    let manifest = run_adapter(&ManifestBuilder::new(dir.path()), &adapter, &completion).unwrap();

    assert_eq!(manifest.entry.as_deref(), Some("/index.html"));
    assert_eq!(manifest.assets, vec!["/app.js", "/pending-chunk.js"]);
  }

  #[test]
  fn relative_output_dir_resolves_against_builder_working_dir() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dist");
    fs::create_dir_all(out.join("assets")).unwrap();
    fs::write(out.join("index.html"), "<html></html>").unwrap();

    let adapter = EmittedAssetsAdapter::new(EmittingHost::Vite, AdapterOptions::default());
    let completion = BuildCompletion::success()
      .with_output_dir("dist")
      .with_emitted([out.join("assets/pending.js")]);

    let manifest = run_adapter(&ManifestBuilder::new(dir.path()), &adapter, &completion).unwrap();

    assert_eq!(manifest.assets, vec!["/assets/pending.js"]);
  }
}
