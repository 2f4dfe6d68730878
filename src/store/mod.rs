//! Key-value persistence for session preferences.
//!
//! One table holds the last input text, the theme, the model, and the
//! stored API key. Values are plain strings with no schema versioning.

pub mod sqlite;

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};

pub use sqlite::SqliteStore;

/// Where the session keeps what it remembers between runs.
pub trait Store: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Volatile store for tests and `--db :memory:`-style runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
