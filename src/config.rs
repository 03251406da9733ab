//! Project configuration loader supplying defaults for manifest generation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::asset_paths::{DEFAULT_ENTRY_HTML, DEFAULT_OUTPUT_DIR};
use crate::models::GenerationRequest;

/// File name searched for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "despia.config.json";

/// Discoverable project configuration mirroring the generation request fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Directory scanned for built assets.
    pub output_dir: String,
    /// Entry HTML document of the application.
    pub entry_html: String,
    /// Extra paths merged into every generated manifest.
    pub additional_paths: Vec<String>,
    /// Leave the entry document out of the asset list (server-rendered apps).
    pub skip_entry_html: bool,
    /// Alternative location for the manifest file.
    pub manifest_output_path: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            entry_html: DEFAULT_ENTRY_HTML.into(),
            additional_paths: Vec::new(),
            skip_entry_html: false,
            manifest_output_path: None,
        }
    }
}

impl ProjectConfig {
    /// Load `despia.config.json` from `dir`, falling back to defaults.
    ///
    /// A missing file is the common case and is silent; a file that exists but cannot be parsed
    /// is reported as a warning so a typo does not go unnoticed.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.exists() {
            return Self::default();
        }
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read configuration");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring invalid configuration");
                None
            }
        }
    }

    /// Convert the configuration into a generation request.
    pub fn into_request(self) -> GenerationRequest {
        GenerationRequest {
            output_dir: PathBuf::from(self.output_dir),
            entry_html: self.entry_html,
            additional_paths: self.additional_paths,
            skip_entry_html: self.skip_entry_html,
            manifest_output_path: self.manifest_output_path.map(PathBuf::from),
        }
    }
}
