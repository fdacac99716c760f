use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./.branch-directory/branches.json";

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_pretty_output() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Branch store (JSON file)
    #[serde(default = "default_store_path")]
    pub store_path: String,

    // Output formatting
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            pretty_output: default_pretty_output(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// Falls back to defaults when the file does not exist
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            log::info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
