use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::session::Session;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn description(&self) -> &str {
        "discard the draft"
    }

    async fn execute(
        &self,
        _args: &str,
        session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        session.clear();
        println!("  ✓ draft cleared");
        CommandResult::Handled
    }
}
