//! Integrations for hosts whose output directory has to be probed.

use std::path::PathBuf;

use crate::builder::ManifestBuilder;
use crate::models::GenerationRequest;

use super::{AdapterOptions, BuildAdapter, BuildCompletion};

/// How a Nuxt application was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NuxtMode {
  /// `nuxt generate` static output.
  Generate,
  /// Legacy `target: 'static'` builds.
  Static,
  /// Server-rendered builds with client assets under `.nuxt/dist/client`.
  Server,
}

/// Host tools whose build-end hook does not say where the output went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbingHost {
  /// Nuxt `build:done`.
  Nuxt(NuxtMode),
  /// SvelteKit `buildEnd`.
  SvelteKit,
  /// Remix `buildEnd`.
  Remix,
}

impl ProbingHost {
  /// Identifier used in logs.
  pub fn name(self) -> &'static str {
    match self {
      Self::Nuxt(_) => "nuxt",
      Self::SvelteKit => "sveltekit",
      Self::Remix => "remix",
    }
  }

  /// Candidate output directories in probe order, each flagged when its entry is server rendered.
  pub fn candidates(self) -> Vec<(&'static str, bool)> {
    let mut candidates = match self {
      Self::Nuxt(mode) => {
        let primary = match mode {
          NuxtMode::Generate => (".output/public", false),
          NuxtMode::Static => ("dist", false),
          NuxtMode::Server => (".nuxt/dist/client", true),
        };
        vec![
          primary,
          (".output/public", false),
          ("dist", false),
          (".nuxt/dist", true),
        ]
      }
      Self::SvelteKit => vec![("build", false), (".svelte-kit", false), ("dist", false)],
      Self::Remix => vec![("build/client", true), ("build", true), ("public/build", true)],
    };

    let mut seen = Vec::new();
    candidates.retain(|(dir, _)| {
      if seen.contains(dir) {
        false
      } else {
        seen.push(*dir);
        true
      }
    });
    candidates
  }
}

/// Adapter trying an ordered list of output directories until one exists.
#[derive(Debug, Clone)]
pub struct ProbingAdapter {
  host: ProbingHost,
  options: AdapterOptions,
}

impl ProbingAdapter {
  /// Create an adapter for `host` configured with `options`.
  pub fn new(host: ProbingHost, options: AdapterOptions) -> Self {
    Self { host, options }
  }
}

impl BuildAdapter for ProbingAdapter {
  fn name(&self) -> &str {
    self.host.name()
  }

  fn requests(&self, completion: &BuildCompletion, builder: &ManifestBuilder) -> Vec<GenerationRequest> {
    let candidates = self.host.candidates();
    // Explicit directories are tried first and inherit the policy of the preset's first guess.
    let explicit_ssr = candidates.first().is_some_and(|(_, ssr)| *ssr);
    let explicit = completion
      .output_dir
      .iter()
      .chain(self.options.out_dir.iter())
      .map(|dir| (dir.clone(), explicit_ssr));
    let presets = candidates
      .into_iter()
      .map(|(dir, ssr)| (PathBuf::from(dir), ssr));

    let mut requests: Vec<GenerationRequest> = Vec::new();
    for (dir, server_rendered) in explicit.chain(presets) {
      if requests.iter().any(|request| request.output_dir == dir) {
        continue;
      }
      requests.push(self.options.request(builder, dir, server_rendered, &completion.emitted));
    }
    requests
  }
}
