//! Text panels printed by the REPL and the one-shot subcommands.

use crate::analyzer::Analysis;
use crate::theme::{Theme, paint};

/// The tone line, suggestion bullets, and word/char counter.
/// Empty text renders nothing.
pub fn analysis_panel(text: &str, analysis: &Analysis, theme: Theme) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "  Tone: {}\n",
        paint(theme.tone_color(analysis.tone), analysis.tone.as_str())
    );
    for suggestion in &analysis.suggestions {
        out.push_str(&format!("    • {suggestion}\n"));
    }
    out.push_str(&format!(
        "  {}\n",
        paint(theme.muted(), &counter(analysis.words, analysis.chars))
    ));
    out
}

pub fn counter(words: usize, chars: usize) -> String {
    format!("{words} words / {chars} chars")
}

/// The rewrite output block.
pub fn rewrite_panel(result: &str, theme: Theme) -> String {
    let mut out = format!("  {}\n", paint(theme.muted(), "Gemini rewrite"));
    for line in result.lines() {
        out.push_str(&format!("  {line}\n"));
    }
    out
}
