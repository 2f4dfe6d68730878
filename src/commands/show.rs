use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;
use crate::session::Session;

pub struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    fn name(&self) -> &str {
        "/show"
    }

    fn description(&self) -> &str {
        "print the draft with its tone and suggestions"
    }

    async fn execute(
        &self,
        _args: &str,
        session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        if session.text().is_empty() {
            println!("  (no draft yet, just start typing)");
            return CommandResult::Handled;
        }
        for line in session.text().lines() {
            println!("  │ {line}");
        }
        print!(
            "{}",
            render::analysis_panel(session.text(), session.analysis(), session.theme())
        );
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{test_info, test_session};

    #[tokio::test]
    async fn handles_empty_and_filled_drafts() {
        let mut session = test_session();
        assert!(matches!(
            ShowCommand.execute("", &mut session, &test_info()).await,
            CommandResult::Handled
        ));
        session.set_text("one\ntwo");
        assert!(matches!(
            ShowCommand.execute("", &mut session, &test_info()).await,
            CommandResult::Handled
        ));
        assert_eq!(session.text(), "one\ntwo");
    }
}
