//! Copy-to-clipboard, fire-and-forget.

use std::sync::Mutex;

use anyhow::{Result, anyhow};

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// The OS clipboard.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        cli_clipboard::set_contents(text.to_string())
            .map_err(|e| anyhow!("clipboard write failed: {e}"))
    }
}

/// Keeps the last copied text in memory. For tests and headless runs.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
