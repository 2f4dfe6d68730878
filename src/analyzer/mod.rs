//! Real-time tone and writing hints.
//!
//! Everything here is a pure function of the input text: the same text always
//! yields the same [`Analysis`]. Callers recompute wholesale on every edit.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static NEGATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("hate|angry|terrible").expect("valid negative pattern"));
static POSITIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("love|great|amazing").expect("valid positive pattern"));
static REASONING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("because|since|therefore").expect("valid reasoning pattern"));

pub const MORE_DETAIL: &str = "Consider adding more detail.";
pub const ADD_REASONING: &str = "Add reasoning or examples.";
pub const SPLIT_SENTENCES: &str = "Try splitting into shorter sentences.";
pub const TOO_BRIEF: &str = "A single sentence is too brief.";

/// Below this many chars the text is considered thin.
const MIN_CHARS: usize = 30;
/// Above this many chars, text without a reasoning word gets a hint.
const REASONING_CHARS: usize = 40;
const MAX_WORDS: usize = 60;
const MIN_WORDS: usize = 5;

/// Heuristic sentiment label. Keyword based, not real sentiment analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "Positive",
            Tone::Negative => "Negative",
            Tone::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived view of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Analysis {
    pub tone: Tone,
    pub suggestions: Vec<String>,
    pub words: usize,
    /// Unicode scalar values, so an emoji counts once rather than as two UTF-16 units.
    pub chars: usize,
}

/// Classify the tone of `text` and collect writing suggestions.
pub fn analyze(text: &str) -> Analysis {
    if text.is_empty() {
        return Analysis::default();
    }

    let lower = text.to_lowercase();
    let chars = text.chars().count();
    let words = count_words(text);

    // Positive is checked last and wins when both match.
    let mut tone = Tone::Neutral;
    if NEGATIVE.is_match(&lower) {
        tone = Tone::Negative;
    }
    if POSITIVE.is_match(&lower) {
        tone = Tone::Positive;
    }

    let mut suggestions = Vec::new();
    if chars < MIN_CHARS {
        suggestions.push(MORE_DETAIL.to_string());
    }
    if !REASONING.is_match(&lower) && chars > REASONING_CHARS {
        suggestions.push(ADD_REASONING.to_string());
    }
    if words > MAX_WORDS {
        suggestions.push(SPLIT_SENTENCES.to_string());
    }
    if words < MIN_WORDS {
        suggestions.push(TOO_BRIEF.to_string());
    }

    Analysis {
        tone,
        suggestions,
        words,
        chars,
    }
}

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
