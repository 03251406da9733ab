#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod adapters;
pub mod asset_paths;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;

pub use builder::{ManifestBuilder, generate_manifest};
pub use error::{ManifestError, ManifestResult};
pub use models::{GenerationRequest, Manifest};
