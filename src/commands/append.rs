use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;
use crate::session::Session;

pub struct AppendCommand;

#[async_trait]
impl Command for AppendCommand {
    fn name(&self) -> &str {
        "/append"
    }

    fn aliases(&self) -> &[&str] {
        &["/a"]
    }

    fn usage(&self) -> &str {
        "<text>"
    }

    fn description(&self) -> &str {
        "add a line to the draft instead of replacing it"
    }

    async fn execute(
        &self,
        args: &str,
        session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        if args.is_empty() {
            eprintln!("  ✗ usage: /append <text>");
            return CommandResult::Handled;
        }
        session.append_line(args);
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
    async fn appends_lines() {
        let mut session = test_session();
        AppendCommand.execute("first", &mut session, &test_info()).await;
        AppendCommand.execute("second", &mut session, &test_info()).await;
        assert_eq!(session.text(), "first\nsecond");
    }

    #[tokio::test]
    async fn empty_args_leave_text_alone() {
        let mut session = test_session();
        session.set_text("keep");
        AppendCommand.execute("", &mut session, &test_info()).await;
        assert_eq!(session.text(), "keep");
    }
}
