use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::session::Session;

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "exit the REPL"
    }

    async fn execute(
        &self,
        _args: &str,
        _session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        CommandResult::Quit
    }
}
