//! Light/dark preference and the terminal colours that go with it.

use std::fmt;

use crate::analyzer::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read a stored value. Anything but `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Parse user input; unlike [`Theme::from_stored`] this rejects unknowns.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// ANSI SGR code for a tone label.
    pub fn tone_color(&self, tone: Tone) -> &'static str {
        match (self, tone) {
            (Theme::Light, Tone::Positive) => "32",
            (Theme::Light, Tone::Negative) => "31",
            (Theme::Light, Tone::Neutral) => "34",
            (Theme::Dark, Tone::Positive) => "92",
            (Theme::Dark, Tone::Negative) => "91",
            (Theme::Dark, Tone::Neutral) => "96",
        }
    }

    /// ANSI SGR code for secondary text (counters, headers).
    pub fn muted(&self) -> &'static str {
        match self {
            Theme::Light => "90",
            Theme::Dark => "37",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in an SGR colour sequence.
pub fn paint(code: &str, text: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Theme::parse(" Dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn as_str_round_trips_through_storage() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn tone_colors_differ_per_tone() {
        for theme in [Theme::Light, Theme::Dark] {
            let p = theme.tone_color(Tone::Positive);
            let n = theme.tone_color(Tone::Negative);
            let u = theme.tone_color(Tone::Neutral);
            assert!(p != n && n != u && p != u);
        }
    }

    #[test]
    fn paint_wraps_and_resets() {
        assert_eq!(paint("32", "ok"), "\x1b[32mok\x1b[0m");
    }
}
