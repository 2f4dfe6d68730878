use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;
use crate::session::Session;

pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }

    fn description(&self) -> &str {
        "show model, auth, theme, and draft size"
    }

    async fn execute(
        &self,
        _args: &str,
        session: &mut Session,
        info: &SessionInfo<'_>,
    ) -> CommandResult {
        println!("  model   {}", session.model().await);
        println!("  auth    {}", info.auth_status);
        println!("  theme   {}", session.theme());
        println!("  store   {}", info.store);
        println!("  draft   {}", render::counter(session.words(), session.chars()));
        if let Some(result) = session.result() {
            println!("  result  {} chars", result.chars().count());
        }
        CommandResult::Handled
    }
}
