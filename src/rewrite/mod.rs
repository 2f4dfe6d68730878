//! Sends the current text to a [`Generator`] and keeps the latest answer.

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use tokio::sync::{RwLock, watch};

use crate::consts::{FALLBACK_RESULT, SERVICE_WARNING};
use crate::generator::Generator;
use crate::prompts::build_rewrite_prompt;

/// Which prompt template to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RewriteMode {
    Expand,
    Shorten,
    Formalize,
}

impl RewriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteMode::Expand => "expand",
            RewriteMode::Shorten => "shorten",
            RewriteMode::Formalize => "formalize",
        }
    }

    pub fn all() -> [RewriteMode; 3] {
        [
            RewriteMode::Expand,
            RewriteMode::Shorten,
            RewriteMode::Formalize,
        ]
    }
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the rewrite result and the loading flag.
///
/// `rewrite` takes `&self` and does not serialize callers: two overlapping
/// requests both run, and whichever finishes last owns the stored result.
pub struct RewriteClient {
    generator: RwLock<Arc<dyn Generator>>,
    result: watch::Sender<Option<String>>,
    loading: watch::Sender<bool>,
}

impl RewriteClient {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        let (result, _) = watch::channel(None);
        let (loading, _) = watch::channel(false);
        Self {
            generator: RwLock::new(generator),
            result,
            loading,
        }
    }

    /// Rewrite `text` using `mode`.
    ///
    /// Returns `None` without touching any state when `text` is blank.
    /// Otherwise calls the generator once and returns what was stored:
    /// the generated text, [`FALLBACK_RESULT`] for empty output, or
    /// [`SERVICE_WARNING`] if the call failed.
    pub async fn rewrite(&self, text: &str, mode: RewriteMode) -> Option<String> {
        if text.trim().is_empty() {
            tracing::debug!(%mode, "skipping rewrite of blank text");
            return None;
        }

        let generator = Arc::clone(&*self.generator.read().await);
        let prompt = build_rewrite_prompt(mode, text);

        self.loading.send_replace(true);
        tracing::info!(%mode, model = generator.model(), "rewrite requested");

        let result = match generator.generate(&prompt).await {
            Ok(output) if output.is_empty() => FALLBACK_RESULT.to_string(),
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(%mode, error = %e, "rewrite failed");
                SERVICE_WARNING.to_string()
            }
        };

        self.result.send_replace(Some(result.clone()));
        self.loading.send_replace(false);
        Some(result)
    }

    /// The latest stored result, if any rewrite has completed.
    pub fn result(&self) -> Option<String> {
        self.result.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Watch the loading flag (drives the spinner).
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Swap the generator at runtime. The next request will use the new one.
    pub async fn set_generator(&self, generator: Arc<dyn Generator>) {
        *self.generator.write().await = generator;
    }

    pub async fn model(&self) -> String {
        self.generator.read().await.model().to_string()
    }
}
