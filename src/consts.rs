//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default Gemini model when none is specified or stored.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Base URL of the Gemini REST API.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shown when the service answers with empty text.
pub const FALLBACK_RESULT: &str = "No response";

/// Shown when the service call fails for any reason.
pub const SERVICE_WARNING: &str = "⚠️  Could not reach Gemini";

// Store keys.
pub const LAST_TEXT_KEY: &str = "lastText";
pub const THEME_KEY: &str = "theme";
pub const MODEL_KEY: &str = "model";
pub const API_KEY_KEY: &str = "gemini_api_key";

/// Environment variables checked for an API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Default database path: `~/.tonewise/tonewise.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".tonewise").join("tonewise.db"))
}
