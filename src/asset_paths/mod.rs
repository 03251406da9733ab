//! Helpers for normalising asset paths into the root-relative form used by the manifest.
//!
//! Every path that ends up in a manifest passes through here, whether it was discovered on disk
//! or handed over by a build tool, so the forward-slash and single-leading-slash rules hold
//! regardless of the host separator convention.

mod bundle;
mod normalize;

pub use bundle::{emitted_asset_path, relative_asset_path};
pub use normalize::{normalize_entry, to_root_relative};

/// Entry document used when a request does not name one.
pub const DEFAULT_ENTRY_HTML: &str = "index.html";

/// Directory scanned when a request does not name one.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Reserved subdirectory holding the manifest; never scanned.
pub const MANIFEST_DIR_NAME: &str = "despia";

/// File name of the manifest inside [`MANIFEST_DIR_NAME`].
pub const MANIFEST_FILE_NAME: &str = "local.json";
