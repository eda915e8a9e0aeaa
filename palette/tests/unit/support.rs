use async_trait::async_trait;
use glaze::ThemeConfiguration;
use palette::client::Renderer;
use palette::error::{EditorError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub struct Step {
    delay: Duration,
    result: std::result::Result<String, u16>,
}

impl Step {
    pub fn ok(css: &str) -> Self {
        Self::ok_after(css, 0)
    }

    pub fn ok_after(css: &str, millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
            result: Ok(css.to_string()),
        }
    }

    pub fn fail(status: u16) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(status),
        }
    }
}

/// Replays a fixed script of responses and records every call.
#[derive(Default)]
pub struct ScriptedRenderer {
    script: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<(String, ThemeConfiguration)>>,
    completed: AtomicUsize,
}

impl ScriptedRenderer {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            script: Mutex::new(steps.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, ThemeConfiguration)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Renderer for ScriptedRenderer {
    async fn render(&self, html: &str, theme: &ThemeConfiguration) -> Result<String> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((html.to_string(), theme.clone()));
            calls.len()
        };
        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Step::ok(&format!("/* render {call} */")));

        tokio::time::sleep(step.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        step.result.map_err(|status| EditorError::Status {
            status,
            body: "render failed".to_string(),
        })
    }
}
