use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::session::Session;
use crate::theme::Theme;

pub struct ThemeCommand;

#[async_trait]
impl Command for ThemeCommand {
    fn name(&self) -> &str {
        "/theme"
    }

    fn usage(&self) -> &str {
        "[light|dark]"
    }

    fn description(&self) -> &str {
        "toggle or set the colour theme"
    }

    async fn execute(
        &self,
        args: &str,
        session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        if args.is_empty() {
            let theme = session.toggle_theme();
            println!("  ✓ theme is now {theme}");
            return CommandResult::Handled;
        }

        match Theme::parse(args) {
            Some(theme) => {
                session.set_theme(theme);
                println!("  ✓ theme is now {theme}");
            }
            None => eprintln!("  ✗ unknown theme: {args} (use light or dark)"),
        }
        CommandResult::Handled
    }
}
