//! Command line surface of the `despia-local` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use crate::builder::ManifestBuilder;
use crate::config::ProjectConfig;
use crate::models::GenerationRequest;

/// Generate despia/local.json for a built web application.
///
/// Run after your build completes; every file in OUTPUT_DIR is listed in the manifest.
#[derive(Debug, Parser)]
#[command(name = "despia-local", version)]
pub struct Cli {
  /// Build output directory to scan [default: dist]
  #[arg(value_name = "OUTPUT_DIR")]
  pub output_dir: Option<PathBuf>,

  /// Entry HTML document [default: index.html]
  #[arg(value_name = "ENTRY_HTML")]
  pub entry_html: Option<String>,

  /// Write the manifest here instead of <OUTPUT_DIR>/despia/local.json
  #[arg(short, long, value_name = "PATH")]
  pub output: Option<PathBuf>,

  /// Leave the entry document out of the manifest (server-rendered apps);
  /// `--skip-entry-html=false` overrides a configured `true`
  #[arg(
    long,
    value_name = "BOOL",
    num_args = 0..=1,
    require_equals = true,
    default_missing_value = "true"
  )]
  pub skip_entry_html: Option<bool>,

  /// Configuration file [default: ./despia.config.json when present]
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Increase log verbosity (-v, -vv, -vvv)
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,

  /// Only print errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,
}

impl Cli {
  /// Load the configuration file selected by `--config`, or discover one in `working_dir`.
  pub fn load_config(&self, working_dir: &Path) -> Result<ProjectConfig> {
    match &self.config {
      Some(path) => {
        let path = working_dir.join(path);
        ProjectConfig::from_path(&path)
          .with_context(|| format!("failed to load configuration from {}", path.display()))
      }
      None => Ok(ProjectConfig::discover(working_dir)),
    }
  }

  /// Overlay command line arguments on top of the configured request.
  pub fn apply(&self, mut request: GenerationRequest) -> GenerationRequest {
    if let Some(output_dir) = &self.output_dir {
      request.output_dir = output_dir.clone();
    }
    if let Some(entry_html) = &self.entry_html {
      request.entry_html = entry_html.clone();
    }
    if let Some(output) = &self.output {
      request.manifest_output_path = Some(output.clone());
    }
    if let Some(skip) = self.skip_entry_html {
      request.skip_entry_html = skip;
    }
    request
  }
}

/// Generate the manifest described by `cli` and print a summary.
pub fn run(cli: &Cli, builder: &ManifestBuilder) -> Result<()> {
  let request = cli.apply(cli.load_config(builder.working_dir())?.into_request());

  let output_dir = builder.resolve_output_dir(&request);
  let manifest_path = builder.resolve_manifest_path(&request);
  if !cli.quiet {
    println!("Scanning {} for assets...", output_dir.display());
  }

  let manifest = builder.generate(&request)?;

  if !cli.quiet {
    println!("✓ Generated {}", manifest_path.display());
    println!("✓ Included {} assets", manifest.assets.len());
    match &manifest.entry {
      Some(entry) => println!("✓ Entry HTML: {entry}"),
      None => println!("✓ Entry HTML: none (skipped for server rendering)"),
    }
  }
  Ok(())
}
