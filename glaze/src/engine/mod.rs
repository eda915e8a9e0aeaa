use crate::config::GenerationConfig;
use crate::error::{GlazeError, Result};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

mod layers;
pub mod scan;
pub mod tailwind;
pub mod utilities;
pub mod utility;

pub use tailwind::TailwindCli;
pub use utility::UtilityEngine;

/// Turns a baseline stylesheet into generated CSS for one configuration.
pub trait StylesheetEngine: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, baseline: &str, config: &GenerationConfig) -> Result<String>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EngineKind {
    #[default]
    Builtin,
    Tailwind,
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Builtin => write!(f, "builtin"),
            EngineKind::Tailwind => write!(f, "tailwind"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = GlazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" => Ok(Self::Builtin),
            "tailwind" | "tailwindcss" => Ok(Self::Tailwind),
            other => Err(GlazeError::EngineUnavailable(format!(
                "unknown engine `{other}` (expected builtin|tailwind)"
            ))),
        }
    }
}

pub fn build_engine(
    kind: EngineKind,
    tailwind_bin: Option<PathBuf>,
) -> Result<Arc<dyn StylesheetEngine>> {
    match kind {
        EngineKind::Builtin => Ok(Arc::new(UtilityEngine::new())),
        EngineKind::Tailwind => {
            let cli = match tailwind_bin {
                Some(binary) => TailwindCli::with_binary(binary),
                None => TailwindCli::locate()?,
            };
            Ok(Arc::new(cli))
        }
    }
}
