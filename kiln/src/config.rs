use anyhow::{Context, Result};
use glaze::EngineKind;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub addr: SocketAddr,
    pub max_body_bytes: usize,
    pub engine: EngineKind,
    pub tailwind_bin: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080))),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            engine: EngineKind::Builtin,
            tailwind_bin: None,
        }
    }
}

impl ServiceConfig {
    /// Reads `SERVER_ADDR`, `MAX_REQUEST_BODY_BYTES`, `GLAZE_ENGINE` and `TAILWIND_BIN`.
    pub fn from_env() -> Result<Self> {
        let tailwind_bin =
            envmnt::exists("TAILWIND_BIN").then(|| envmnt::get_or("TAILWIND_BIN", ""));
        Self::from_values(
            &envmnt::get_or("SERVER_ADDR", DEFAULT_ADDR),
            &envmnt::get_or("MAX_REQUEST_BODY_BYTES", &DEFAULT_MAX_BODY_BYTES.to_string()),
            &envmnt::get_or("GLAZE_ENGINE", "builtin"),
            tailwind_bin.as_deref(),
        )
    }

    pub fn from_values(
        addr: &str,
        max_body_bytes: &str,
        engine: &str,
        tailwind_bin: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            addr: addr
                .parse()
                .with_context(|| format!("invalid SERVER_ADDR `{addr}`"))?,
            max_body_bytes: max_body_bytes.parse().unwrap_or(DEFAULT_MAX_BODY_BYTES),
            engine: engine.parse()?,
            tailwind_bin: tailwind_bin
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
