use crate::error::Result;
use crate::theme::ThemeConfiguration;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration handed to a stylesheet engine for one render.
#[derive(Clone, Debug, Serialize)]
pub struct GenerationConfig {
    pub content: Vec<ContentSource>,
    pub theme: ThemeLayer,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContentSource {
    pub raw: String,
    pub extension: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ThemeLayer {
    pub extend: ThemeConfiguration,
}

impl GenerationConfig {
    /// Scopes content scanning to `markup` alone.
    pub fn for_markup(markup: &str, extend: ThemeConfiguration) -> Self {
        Self {
            content: vec![ContentSource {
                raw: markup.to_string(),
                extension: "html".to_string(),
            }],
            theme: ThemeLayer { extend },
        }
    }
}

/// Body of `POST /`.
///
/// The theme fragment stays untyped on the wire so that a well-formed body with
/// an unusable theme can be told apart from a malformed one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderRequest {
    pub html: String,
    pub theme: RequestTheme,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestTheme {
    pub extend: Value,
}

impl RenderRequest {
    pub fn new(html: impl Into<String>, theme: &ThemeConfiguration) -> Self {
        Self {
            html: html.into(),
            theme: RequestTheme {
                extend: theme.to_json(),
            },
        }
    }

    pub fn theme_fragment(&self) -> Result<ThemeConfiguration> {
        ThemeConfiguration::from_json(&self.theme.extend)
    }
}
