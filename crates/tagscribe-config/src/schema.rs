//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default document title.
pub const DEFAULT_HEADER: &str = "Projecty McProjectFace";

/// Default changelog file name.
pub const DEFAULT_FILE_NAME: &str = "changelog.md";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Changelog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Document title.
    #[serde(default = "default_header")]
    pub header: String,

    /// Directory the changelog is written to (current directory if unset).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Changelog file name.
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Fail on unreadable commit ranges instead of writing a placeholder.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            output_dir: None,
            filename: default_filename(),
            strict: false,
        }
    }
}

impl ChangelogConfig {
    /// Returns the full path of the changelog file.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(&self.filename),
            None => PathBuf::from(&self.filename),
        }
    }
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_filename() -> String {
    DEFAULT_FILE_NAME.to_string()
}
