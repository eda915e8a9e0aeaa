//! Theme editor: store + form + preview, with one render per mutation.
//!
//! Every render is tagged with a generation number. A response only reaches
//! the document if it is newer than every settled one, and issuing a new
//! render cancels the one still in flight (unless disabled in options).

use crate::client::Renderer;
use crate::document::PreviewDocument;
use crate::error::Result;
use crate::fields::ThemeForm;
use crate::store::ThemeStore;
use glaze::{ThemeConfiguration, ThemePath};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorState {
    Uninitialized,
    Rendering { generation: u64 },
    Rendered { generation: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorStatus {
    pub state: EditorState,
    /// Latest generation handed to the renderer.
    pub issued: u64,
    /// Latest generation that finished, successfully or not.
    pub settled: u64,
    /// Generation whose CSS is in the document.
    pub applied: Option<u64>,
    pub last_error: Option<String>,
}

impl Default for EditorStatus {
    fn default() -> Self {
        Self {
            state: EditorState::Uninitialized,
            issued: 0,
            settled: 0,
            applied: None,
            last_error: None,
        }
    }
}

impl EditorStatus {
    pub fn is_settled(&self) -> bool {
        self.settled >= self.issued
    }

    fn refresh_state(&mut self) {
        self.state = if !self.is_settled() {
            EditorState::Rendering {
                generation: self.issued,
            }
        } else {
            match self.applied {
                Some(generation) => EditorState::Rendered { generation },
                None => EditorState::Uninitialized,
            }
        };
    }
}

#[derive(Copy, Clone, Debug)]
pub struct EditorOptions {
    pub cancel_superseded: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            cancel_superseded: true,
        }
    }
}

struct Shared {
    renderer: Arc<dyn Renderer>,
    runtime: Handle,
    options: EditorOptions,
    document: Mutex<PreviewDocument>,
    generation: AtomicU64,
    inflight: Mutex<Option<CancellationToken>>,
    status: watch::Sender<EditorStatus>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Shared {
    fn issue(self: &Arc<Self>, theme: ThemeConfiguration) {
        let markup = lock(&self.document).body_markup();

        let (generation, token) = {
            let mut inflight = lock(&self.inflight);
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let token = CancellationToken::new();
            if let Some(previous) = inflight.replace(token.clone())
                && self.options.cancel_superseded
            {
                previous.cancel();
            }
            (generation, token)
        };

        self.status.send_modify(|status| {
            status.issued = generation;
            status.refresh_state();
        });

        let markup = match markup {
            Ok(markup) => markup,
            Err(e) => {
                self.settle(generation, Err(e));
                return;
            }
        };

        tracing::debug!(generation, "issuing render");
        let shared = Arc::clone(self);
        self.runtime.spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(generation, "render superseded, cancelled");
                    return;
                }
                outcome = shared.renderer.render(&markup, &theme) => outcome,
            };
            shared.settle(generation, outcome);
        });
    }

    fn settle(&self, generation: u64, outcome: Result<String>) {
        // Held across the staleness check and the write so that two responses
        // cannot both pass the check.
        let mut document = lock(&self.document);
        // A response older than any settled one, success or failure, is stale.
        let latest = self.status.borrow().settled;
        if generation <= latest {
            match outcome {
                Ok(_) => tracing::debug!(generation, latest, "discarding stale render"),
                Err(e) => tracing::debug!(generation, latest, "ignoring stale failure: {e}"),
            }
            return;
        }

        let outcome = match outcome {
            Ok(css) => document.apply_stylesheet(&css),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => tracing::info!(generation, "stylesheet applied"),
            Err(ref e) => {
                tracing::warn!(generation, "render failed, keeping previous stylesheet: {e}")
            }
        }

        self.status.send_modify(|status| {
            match &outcome {
                Ok(()) => {
                    status.applied = Some(generation);
                    status.last_error = None;
                }
                Err(e) => status.last_error = Some(e.to_string()),
            }
            status.settled = generation;
            status.refresh_state();
        });
    }
}

pub struct ThemeEditor {
    store: ThemeStore,
    form: ThemeForm,
    shared: Arc<Shared>,
}

impl ThemeEditor {
    /// Builds the editor and issues the initial render.
    pub fn start(
        theme: ThemeConfiguration,
        document: PreviewDocument,
        renderer: Arc<dyn Renderer>,
        runtime: Handle,
        options: EditorOptions,
    ) -> Self {
        let (status, _) = watch::channel(EditorStatus::default());
        let shared = Arc::new(Shared {
            renderer,
            runtime,
            options,
            document: Mutex::new(document),
            generation: AtomicU64::new(0),
            inflight: Mutex::new(None),
            status,
        });

        let form = ThemeForm::new(&theme);
        let mut store = ThemeStore::new(theme);
        let listener = Arc::clone(&shared);
        store.subscribe(move |theme| listener.issue(theme.clone()));

        shared.issue(store.snapshot());
        Self {
            store,
            form,
            shared,
        }
    }

    pub fn theme(&self) -> &ThemeConfiguration {
        self.store.theme()
    }

    pub fn form(&self) -> &ThemeForm {
        &self.form
    }

    pub fn display(&self, path: &ThemePath) -> Option<String> {
        self.form.field(path)?.display(self.store.theme())
    }

    /// Routes an edit through the field's commit policy.
    pub fn input(&mut self, path: &ThemePath, raw: &str) -> Result<Option<String>> {
        self.form.field_mut(path)?.input(&mut self.store, raw)
    }

    pub fn stage(&mut self, path: &ThemePath, raw: &str) -> Result<()> {
        self.form.field_mut(path)?.stage(raw);
        Ok(())
    }

    pub fn commit(&mut self, path: &ThemePath) -> Result<String> {
        self.form.field_mut(path)?.commit(&mut self.store)
    }

    pub fn set(&mut self, path: &ThemePath, raw: &str) -> Result<String> {
        self.form.field_mut(path)?.submit(&mut self.store, raw)
    }

    pub fn status(&self) -> EditorStatus {
        self.shared.status.borrow().clone()
    }

    /// Resolves once the most recently issued render has finished.
    pub async fn wait_settled(&self) -> EditorStatus {
        let mut receiver = self.shared.status.subscribe();
        match receiver.wait_for(EditorStatus::is_settled).await {
            Ok(status) => status.clone(),
            Err(_) => self.status(),
        }
    }

    pub fn document(&self) -> PreviewDocument {
        lock(&self.shared.document).clone()
    }
}
