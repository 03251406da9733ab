//! despia-local - generate despia/local.json for offline delivery of a built web app.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use despia_local::{ManifestBuilder, ManifestError};
use despia_local::cli::{self, Cli};

fn main() -> ExitCode {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      err.print().ok();
      return if err.use_stderr() {
        ExitCode::FAILURE
      } else {
        ExitCode::SUCCESS
      };
    }
  };
  init_tracing(&cli);

  match cli::run(&cli, &ManifestBuilder::default()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {err:#}");
      if let Some(ManifestError::DirectoryNotFound { .. }) = err.downcast_ref::<ManifestError>() {
        eprintln!("Please run this command after your build completes.");
      }
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(cli: &Cli) {
  let filter = if cli.quiet {
    "error"
  } else {
    match cli.verbose {
      0 => "warn",
      1 => "info",
      2 => "debug",
      _ => "trace",
    }
  };

  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::registry()
    .with(env_filter)
    .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
    .init();
}
