use super::StylesheetEngine;
use crate::config::GenerationConfig;
use crate::error::{GlazeError, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const BINARY_NAME: &str = "tailwindcss";

/// Runs the standalone `tailwindcss` CLI once per render.
#[derive(Clone, Debug)]
pub struct TailwindCli {
    binary: PathBuf,
}

impl TailwindCli {
    pub fn locate() -> Result<Self> {
        which::which(BINARY_NAME)
            .map(Self::with_binary)
            .map_err(|e| GlazeError::EngineUnavailable(format!("{BINARY_NAME}: {e}")))
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn config_module(config: &GenerationConfig) -> Result<String> {
        Ok(format!(
            "module.exports = {};\n",
            serde_json::to_string_pretty(config)?
        ))
    }
}

impl StylesheetEngine for TailwindCli {
    fn name(&self) -> &'static str {
        BINARY_NAME
    }

    fn process(&self, baseline: &str, config: &GenerationConfig) -> Result<String> {
        let workdir = tempfile::tempdir()?;
        let config_path = workdir.path().join("tailwind.config.js");
        let input_path = workdir.path().join("input.css");
        fs::write(&config_path, Self::config_module(config)?)?;
        fs::write(&input_path, baseline)?;

        tracing::debug!(binary = %self.binary.display(), "running tailwindcss");
        let output = Command::new(&self.binary)
            .arg("-c")
            .arg(&config_path)
            .arg("-i")
            .arg(&input_path)
            .current_dir(workdir.path())
            .output()?;

        if !output.status.success() {
            return Err(GlazeError::Process {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
