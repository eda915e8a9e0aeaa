use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".palette.toml";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteConfig {
    pub service_url: String,
    /// Page to preview; the built-in sample page when unset.
    pub page: Option<PathBuf>,
    pub output: PathBuf,
    pub timeout_secs: u64,
    pub cancel_superseded: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:8080/".to_string(),
            page: None,
            output: PathBuf::from("preview.html"),
            timeout_secs: 10,
            cancel_superseded: true,
        }
    }
}

pub fn load_config() -> Result<PaletteConfig> {
    load_config_or_default(CONFIG_FILE)
}

/// Defaults when `path` does not exist; any other failure is an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PaletteConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => parse_config(path, &content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(PaletteConfig::default()),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Loads an explicitly requested file, which must exist.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<PaletteConfig> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(path, &content)
}

fn parse_config(path: &Path, content: &str) -> Result<PaletteConfig> {
    toml::from_str(content).with_context(|| format!("Failed to parse {}", path.display()))
}
