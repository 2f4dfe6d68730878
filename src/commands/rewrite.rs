use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;
use crate::rewrite::RewriteMode;
use crate::session::Session;
use crate::spinner::Spinner;

/// `/expand`, `/shorten`, `/formalize`: one command per mode.
pub struct RewriteCommand {
    mode: RewriteMode,
}

impl RewriteCommand {
    pub fn new(mode: RewriteMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl Command for RewriteCommand {
    fn name(&self) -> &str {
        match self.mode {
            RewriteMode::Expand => "/expand",
            RewriteMode::Shorten => "/shorten",
            RewriteMode::Formalize => "/formalize",
        }
    }

    fn description(&self) -> &str {
        match self.mode {
            RewriteMode::Expand => "ask Gemini to expand the draft into a paragraph",
            RewriteMode::Shorten => "ask Gemini to cut the draft under 30 words",
            RewriteMode::Formalize => "ask Gemini for a professional rewrite",
        }
    }

    async fn execute(
        &self,
        _args: &str,
        session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        if session.text().trim().is_empty() {
            println!("  nothing to {} yet, type some text first", self.mode);
            return CommandResult::Handled;
        }

        let message = format!("rewriting ({}) with {}", self.mode, session.model().await);
        let spinner = Spinner::follow(&message, session.rewriter().subscribe_loading());
        let result = session.rewrite(self.mode).await;
        spinner.stop().await;

        if let Some(result) = result {
            print!("{}", render::rewrite_panel(&result, session.theme()));
        }
        CommandResult::Handled
    }
}
