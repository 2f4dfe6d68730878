use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::session::Session;

pub struct CopyCommand;

#[async_trait]
impl Command for CopyCommand {
    fn name(&self) -> &str {
        "/copy"
    }

    fn description(&self) -> &str {
        "copy the last rewrite (or the draft) to the clipboard"
    }

    async fn execute(
        &self,
        _args: &str,
        session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        let copied = session.copy();
        if copied.is_empty() {
            println!("  nothing to copy");
        } else {
            println!("  ✓ copied {} chars", copied.chars().count());
        }
        CommandResult::Handled
    }
}
