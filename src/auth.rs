//! Gemini API key storage and lookup.

use anyhow::{Context, Result, bail};

use crate::consts::{API_KEY_ENV_VARS, API_KEY_KEY};
use crate::store::Store;

/// Where the active key came from. Shown in the banner and `/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Stored,
    Env(&'static str),
    Missing,
}

impl KeySource {
    pub fn describe(&self) -> String {
        match self {
            KeySource::Stored => "API key ✓".to_string(),
            KeySource::Env(var) => format!("API key ({var}) ✓"),
            KeySource::Missing => "not authenticated".to_string(),
        }
    }
}

/// Resolve the API key. Priority: stored key → environment variables.
pub fn resolve_api_key(store: &dyn Store) -> Result<(Option<String>, KeySource)> {
    resolve_with(store, |var| std::env::var(var).ok())
}

fn resolve_with(
    store: &dyn Store,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(Option<String>, KeySource)> {
    if let Some(key) = store.get(API_KEY_KEY)?
        && !key.is_empty()
    {
        return Ok((Some(key), KeySource::Stored));
    }

    for &var in API_KEY_ENV_VARS {
        if let Some(key) = env(var)
            && !key.is_empty()
        {
            return Ok((Some(key), KeySource::Env(var)));
        }
    }

    Ok((None, KeySource::Missing))
}

/// Save an API key for later runs.
pub fn login(store: &dyn Store, key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        bail!("no API key provided");
    }
    store
        .set(API_KEY_KEY, key)
        .context("failed to save API key")?;
    Ok(())
}

/// Forget the stored API key. Environment variables are untouched.
pub fn logout(store: &dyn Store) -> Result<()> {
    store
        .remove(API_KEY_KEY)
        .context("failed to remove API key")?;
    Ok(())
}
