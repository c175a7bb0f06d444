//! Configuration file parsing for .bpname.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".bpname.toml";

/// Main configuration structure for .bpname.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BpnameConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable color in status messages
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Resolve file paths to absolute form before naming
    #[serde(default = "default_true")]
    pub canonicalize: bool,

    /// Paths skipped by `bpname list`
    #[serde(default = "default_ignore_paths")]
    pub ignore: Vec<String>,
}

// Default functions
fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

fn default_ignore_paths() -> Vec<String> {
    vec![
        "bin/".to_string(),
        "obj/".to_string(),
        ".git/".to_string(),
        ".vs/".to_string(),
        "packages/".to_string(),
    ]
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            canonicalize: true,
            ignore: default_ignore_paths(),
        }
    }
}

impl BpnameConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: BpnameConfig = toml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Find and load .bpname.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
