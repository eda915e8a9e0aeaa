use anyhow::Context;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

pub mod cli;
pub mod client;
pub mod config;
pub mod defaults;
pub mod document;
pub mod editor;
pub mod error;
pub mod fields;
pub mod repl;
pub mod store;

use client::RenderClient;
use config::PaletteConfig;
use document::PreviewDocument;
use editor::{EditorOptions, ThemeEditor};

/// Loads the preview page and starts an editor against the configured service.
pub fn editor_from_config(
    config: &PaletteConfig,
    runtime: tokio::runtime::Handle,
) -> anyhow::Result<ThemeEditor> {
    let page = match &config.page {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read page {}", path.display()))?,
        None => defaults::SAMPLE_PAGE.to_string(),
    };
    let document = PreviewDocument::parse(&page)?;
    let client = RenderClient::new(
        config.service_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    Ok(ThemeEditor::start(
        defaults::default_theme(),
        document,
        Arc::new(client),
        runtime,
        EditorOptions {
            cancel_superseded: config.cancel_superseded,
        },
    ))
}
