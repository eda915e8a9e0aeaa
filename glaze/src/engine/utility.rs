use super::{StylesheetEngine, layers, scan, utilities};
use crate::config::GenerationConfig;
use crate::css::render_rules;
use crate::defaults::default_theme;
use crate::error::{GlazeError, Result};
use crate::theme::ThemeConfiguration;
use std::collections::BTreeSet;

/// In-process engine expanding `@tailwind` directives against a resolved theme.
#[derive(Clone, Debug)]
pub struct UtilityEngine {
    defaults: ThemeConfiguration,
}

impl Default for UtilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UtilityEngine {
    pub fn new() -> Self {
        Self::with_defaults(default_theme())
    }

    pub fn with_defaults(defaults: ThemeConfiguration) -> Self {
        Self { defaults }
    }

    fn layer(
        &self,
        name: &str,
        theme: &ThemeConfiguration,
        candidates: &BTreeSet<String>,
    ) -> Result<String> {
        let rules = match name {
            "base" => layers::base(theme),
            "components" => layers::components(theme, candidates),
            "utilities" => utilities::generate(theme, candidates),
            other => return Err(GlazeError::UnknownLayer(other.to_string())),
        };
        Ok(render_rules(&rules))
    }
}

impl StylesheetEngine for UtilityEngine {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn process(&self, baseline: &str, config: &GenerationConfig) -> Result<String> {
        let theme = self.defaults.extended(&config.theme.extend);
        let candidates = scan::candidates(config.content.iter().map(|c| c.raw.as_str()));
        tracing::debug!(candidates = candidates.len(), "expanding baseline stylesheet");

        let mut css = String::new();
        for line in baseline.lines() {
            match parse_directive(line) {
                Some(layer) => css.push_str(&self.layer(layer, &theme, &candidates)?),
                None => {
                    css.push_str(line);
                    css.push('\n');
                }
            }
        }
        Ok(css)
    }
}

fn parse_directive(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix("@tailwind")?
        .trim()
        .strip_suffix(';')
        .map(str::trim)
}
