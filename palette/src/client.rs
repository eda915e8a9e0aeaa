use crate::error::{EditorError, Result};
use async_trait::async_trait;
use glaze::{RenderRequest, ThemeConfiguration};
use std::time::Duration;

/// Turns page markup plus the whole theme into stylesheet text.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, html: &str, theme: &ThemeConfiguration) -> Result<String>;
}

/// HTTP client for the rendering service.
pub struct RenderClient {
    client: reqwest::Client,
    url: String,
}

impl RenderClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Renderer for RenderClient {
    async fn render(&self, html: &str, theme: &ThemeConfiguration) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&RenderRequest::new(html, theme))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EditorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
