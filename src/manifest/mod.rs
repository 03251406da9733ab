//! Manifest generation broken into focused submodules for easier testing.

mod generation;
mod io;
mod scanning;

pub use generation::assemble_manifest;
pub use io::{load_manifest, render_manifest, write_manifest};
pub use scanning::collect_assets;
