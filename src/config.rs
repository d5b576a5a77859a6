//! Conversion settings loaded from an optional TOML file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix the legacy tool put in front of converted file names
pub const DEFAULT_OUTPUT_PREFIX: &str = "(N)";

fn default_output_prefix() -> String {
    DEFAULT_OUTPUT_PREFIX.to_string()
}

fn default_overwrite() -> bool {
    true
}

/// Settings shared by every conversion in a run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Prepended to the source file name to form the destination name
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Directory for converted files (current directory when unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Exit code when some input was unrecognized and none failed
    #[serde(default)]
    pub unrecognized_exit_code: i32,
    /// Replace destination files that already exist
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_prefix: default_output_prefix(),
            output_dir: None,
            unrecognized_exit_code: 0,
            overwrite: default_overwrite(),
        }
    }
}

impl ConvertConfig {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ConvertConfig = toml::from_str(content)?;
        Ok(config)
    }
}
