//! Fixed prompt templates for each rewrite mode.

use crate::rewrite::RewriteMode;

const EXPAND: &str = "Expand this into a clear 120-word paragraph:";
const SHORTEN: &str = "Shorten this to <30 words while keeping meaning:";
const FORMALIZE: &str = "Rewrite this in a professional tone:";

/// Build the prompt for `mode`, embedding `text` verbatim.
pub fn build_rewrite_prompt(mode: RewriteMode, text: &str) -> String {
    let instruction = match mode {
        RewriteMode::Expand => EXPAND,
        RewriteMode::Shorten => SHORTEN,
        RewriteMode::Formalize => FORMALIZE,
    };
    format!("{instruction}\n\n{text}")
}
