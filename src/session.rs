//! The application state a REPL session works on.
//!
//! A [`Session`] owns the input text and everything derived from it. The
//! analysis is recomputed on every text change and never edited in place.
//! Text and theme are read from the [`Store`] once in [`Session::open`] and
//! written back on every change.

use std::sync::Arc;

use crate::analyzer::{Analysis, analyze};
use crate::clipboard::Clipboard;
use crate::consts::{LAST_TEXT_KEY, MODEL_KEY, THEME_KEY};
use crate::generator::Generator;
use crate::rewrite::{RewriteClient, RewriteMode};
use crate::store::Store;
use crate::theme::Theme;

pub struct Session {
    text: String,
    analysis: Analysis,
    theme: Theme,
    rewriter: RewriteClient,
    store: Arc<dyn Store>,
    clipboard: Arc<dyn Clipboard>,
}

impl Session {
    /// Restore the last text and theme from `store`.
    pub fn open(
        store: Arc<dyn Store>,
        generator: Arc<dyn Generator>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let text = read_or_warn(store.as_ref(), LAST_TEXT_KEY).unwrap_or_default();
        let theme = Theme::from_stored(read_or_warn(store.as_ref(), THEME_KEY).as_deref());

        Self {
            analysis: analyze(&text),
            text,
            theme,
            rewriter: RewriteClient::new(generator),
            store,
            clipboard,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn words(&self) -> usize {
        self.analysis.words
    }

    pub fn chars(&self) -> usize {
        self.analysis.chars
    }

    pub fn rewriter(&self) -> &RewriteClient {
        &self.rewriter
    }

    /// Replace the input text, re-analyze, and persist.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.analysis = analyze(&self.text);
        self.persist(LAST_TEXT_KEY, &self.text);
    }

    /// Add a line to the end of the text.
    pub fn append_line(&mut self, line: &str) {
        let text = if self.text.is_empty() {
            line.to_string()
        } else {
            format!("{}\n{}", self.text, line)
        };
        self.set_text(text);
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// Rewrite the current text. `None` when there is nothing to rewrite.
    pub async fn rewrite(&self, mode: RewriteMode) -> Option<String> {
        self.rewriter.rewrite(&self.text, mode).await
    }

    /// Latest rewrite result, if any.
    pub fn result(&self) -> Option<String> {
        self.rewriter.result()
    }

    /// Copy the rewrite result, or the input text if there is none yet.
    /// Returns what was sent to the clipboard. Clipboard errors are logged
    /// and otherwise ignored.
    pub fn copy(&self) -> String {
        let target = self
            .result()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.text.clone());

        if let Err(e) = self.clipboard.set_text(&target) {
            tracing::warn!(error = %e, "copy to clipboard failed");
        }
        target
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Switch the generator and remember its model for the next run.
    pub async fn set_generator(&self, generator: Arc<dyn Generator>) {
        let model = generator.model().to_string();
        self.rewriter.set_generator(generator).await;
        self.persist(MODEL_KEY, &model);
    }

    pub async fn model(&self) -> String {
        self.rewriter.model().await
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist preference");
        }
    }
}

fn read_or_warn(store: &dyn Store, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read preference");
            None
        }
    }
}
