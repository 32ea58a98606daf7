//! Collection policy.

use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Directory names that are never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "venv",
    ".venv",
    "target",
    "dist",
    "build",
    "vendor",
];

/// Binary, image and font extensions whose files are skipped.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "png", "jpg", "jpeg", "gif", "pdf", "zip", "pyc", "ico", "ttf", "woff",
    "woff2",
];

/// File name prefix of generated artifacts.
pub const DEFAULT_ARTIFACT_PREFIX: &str = "dump_";

/// File name suffix of generated artifacts.
pub const DEFAULT_ARTIFACT_SUFFIX: &str = ".txt";

/// Configuration for a collection run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CollectConfig {
    /// Directory names pruned from the walk (exact match).
    #[builder(default = "default_excluded_dirs()")]
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// File extensions skipped, without the dot (case-insensitive).
    #[builder(default = "default_excluded_extensions()")]
    #[serde(default = "default_excluded_extensions")]
    pub excluded_extensions: Vec<String>,

    /// Include hidden files (starting with .).
    #[builder(default = "false")]
    #[serde(default)]
    pub include_hidden: bool,

    /// Artifact file name prefix.
    #[builder(default = "DEFAULT_ARTIFACT_PREFIX.to_string()")]
    #[serde(default = "default_artifact_prefix")]
    pub artifact_prefix: String,

    /// Artifact file name suffix.
    #[builder(default = "DEFAULT_ARTIFACT_SUFFIX.to_string()")]
    #[serde(default = "default_artifact_suffix")]
    pub artifact_suffix: String,
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_excluded_extensions() -> Vec<String> {
    DEFAULT_EXCLUDED_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_artifact_prefix() -> String {
    DEFAULT_ARTIFACT_PREFIX.to_string()
}

fn default_artifact_suffix() -> String {
    DEFAULT_ARTIFACT_SUFFIX.to_string()
}

impl CollectConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        // An empty prefix or suffix would make every .txt (or every dump_*)
        // file look like a previous artifact.
        if let Some(ref prefix) = self.artifact_prefix {
            if prefix.is_empty() {
                return Err("Artifact prefix cannot be empty".to_string());
            }
            if has_separator(prefix) {
                return Err("Artifact prefix cannot contain a path separator".to_string());
            }
        }
        if let Some(ref suffix) = self.artifact_suffix {
            if suffix.is_empty() {
                return Err("Artifact suffix cannot be empty".to_string());
            }
            if has_separator(suffix) {
                return Err("Artifact suffix cannot contain a path separator".to_string());
            }
        }
        Ok(())
    }
}

/// The artifact must land directly in the collected directory.
fn has_separator(part: &str) -> bool {
    part.contains(['/', '\\'])
}

impl CollectConfig {
    /// Create a new collect config builder.
    pub fn builder() -> CollectConfigBuilder {
        CollectConfigBuilder::default()
    }

    /// Check if a directory name is pruned from the walk.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Check if a file name has a denylisted extension.
    pub fn has_excluded_extension(&self, name: &str) -> bool {
        let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.excluded_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Check if a file name follows the artifact naming convention.
    pub fn is_artifact_name(&self, name: &str) -> bool {
        name.starts_with(&self.artifact_prefix) && name.ends_with(&self.artifact_suffix)
    }

    /// Check if hidden files should be skipped.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }

    /// Check if a file should be left out of the artifact.
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.is_artifact_name(name)
            || self.has_excluded_extension(name)
            || self.should_skip_hidden(name)
    }
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            excluded_extensions: default_excluded_extensions(),
            include_hidden: false,
            artifact_prefix: default_artifact_prefix(),
            artifact_suffix: default_artifact_suffix(),
        }
    }
}
