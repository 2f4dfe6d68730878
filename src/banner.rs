//! Startup banner and farewell line.

use crate::consts::{AUTHOR, REPO};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub model: &'a str,
    pub auth_status: &'a str,
    pub theme: &'a str,
    pub store: &'a str,
}

pub fn banner_text(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║           T O N E W I S E             ║
   ║    type, and hear how it sounds       ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   model     {}
   auth      {}
   theme     {}
   store     {}

   type text to analyze it, /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.model,
        info.auth_status,
        info.theme,
        info.store,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}

pub fn print_farewell(words: usize) {
    if words > 0 {
        println!("draft saved ({words} words).");
    }
    println!("goodbye.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_shows_session_info() {
        let text = banner_text(&BannerInfo {
            model: "gemini-1.5-flash",
            auth_status: "not authenticated",
            theme: "dark",
            store: "ephemeral",
        });
        assert!(text.contains("gemini-1.5-flash"));
        assert!(text.contains("not authenticated"));
        assert!(text.contains("theme     dark"));
        assert!(text.contains("store     ephemeral"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn print_farewell_does_not_panic() {
        print_farewell(0);
        print_farewell(42);
    }
}
